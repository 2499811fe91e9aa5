use crate::availability::AvailabilityStatus;
use crate::campsite::Campsite;
use crate::date_key::DateKey;
use crate::date_window::month_days;
use crate::day_of_week::DaySelection;
use serde::Serialize;

/// One day of a campsite's calendar grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    pub date: DateKey,
    pub day_number: u32,
    pub status: AvailabilityStatus,
    /// Strictly before today.
    pub is_past_day: bool,
    /// The day's weekday is not in a non-empty selection.
    pub is_filtered_out: bool,
}

/// Calendar cells for every day of the month containing `month_start`.
///
/// Days outside `selected_days` are flagged rather than dropped so the grid
/// keeps its weekday alignment.
pub fn project_calendar(
    campsite: &Campsite,
    month_start: DateKey,
    selected_days: &DaySelection,
    today: DateKey,
) -> Vec<CalendarCell> {
    let index = campsite.index();
    month_days(month_start)
        .map(|date| CalendarCell {
            date,
            day_number: date.day(),
            status: index.status_on(date),
            is_past_day: date < today,
            is_filtered_out: !selected_days.admits(&date),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::project_calendar;
    use crate::availability::{AvailabilityMap, AvailabilityStatus};
    use crate::campsite::Campsite;
    use crate::date_key::DateKey;
    use crate::day_of_week::DaySelection;

    fn key(year: i32, month: u32, day: u32) -> DateKey {
        DateKey::from_ymd_opt(year, month, day).unwrap()
    }

    fn campsite() -> Campsite {
        Campsite {
            campsite_id: "1001".to_string(),
            availability: AvailabilityMap::from_raw([
                ("2024-06-03T00:00:00Z", "Available"),
                ("2024-06-04T00:00:00Z", "Reserved"),
            ]),
            ..Default::default()
        }
    }

    #[test]
    fn test_one_cell_per_day() {
        let cells = project_calendar(
            &campsite(),
            key(2024, 6, 1),
            &DaySelection::default(),
            key(2024, 5, 1),
        );
        assert_eq!(cells.len(), 30);
        assert_eq!(cells[0].day_number, 1);
        assert_eq!(cells[29].day_number, 30);
        assert_eq!(cells[2].status, AvailabilityStatus::Available);
        assert_eq!(cells[3].status, AvailabilityStatus::Reserved);
        assert_eq!(cells[4].status, AvailabilityStatus::Unknown);
        assert!(cells.iter().all(|cell| !cell.is_filtered_out && !cell.is_past_day));
    }

    #[test]
    fn test_month_start_need_not_be_first() {
        let cells = project_calendar(
            &campsite(),
            key(2024, 2, 17),
            &DaySelection::default(),
            key(2024, 1, 1),
        );
        assert_eq!(cells.len(), 29);
        assert_eq!(cells[0].date, key(2024, 2, 1));
    }

    #[test]
    fn test_unselected_days_are_flagged_not_dropped() {
        let mondays = DaySelection::new([1]);
        let cells = project_calendar(&campsite(), key(2024, 6, 1), &mondays, key(2024, 5, 1));
        assert_eq!(cells.len(), 30);
        let kept: Vec<u32> = cells
            .iter()
            .filter(|cell| !cell.is_filtered_out)
            .map(|cell| cell.day_number)
            .collect();
        assert_eq!(kept, vec![3, 10, 17, 24]);
    }

    #[test]
    fn test_past_days() {
        let cells = project_calendar(
            &campsite(),
            key(2024, 6, 1),
            &DaySelection::default(),
            key(2024, 6, 10),
        );
        assert!(cells[8].is_past_day);
        assert!(!cells[9].is_past_day);
        assert!(!cells[29].is_past_day);
    }

    #[test]
    fn test_serialized_cell() {
        let cells = project_calendar(
            &campsite(),
            key(2024, 6, 1),
            &DaySelection::default(),
            key(2024, 6, 10),
        );
        let json = serde_json::to_value(&cells[2]).unwrap();
        assert_eq!(json["date"], "2024-06-03");
        assert_eq!(json["status"], "Available");
        assert_eq!(json["is_past_day"], true);
    }
}
