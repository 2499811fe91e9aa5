use crate::availability::AvailabilityIndex;
use crate::date_key::DateKey;
use crate::date_window::current_week_bounds;
use crate::day_of_week::DaySelection;

/// True if some Available date in the Monday-first week containing `today`
/// falls on a selected weekday (any weekday when `days` is empty).
///
/// Only the dates present in the campsite's map are visited, stopping at the
/// first qualifying one.
pub fn matches_current_week(
    index: &AvailabilityIndex<'_>,
    days: &DaySelection,
    today: DateKey,
) -> bool {
    let (start, end) = current_week_bounds(today);
    index
        .available_between(start, end)
        .any(|date| days.admits(&date))
}

#[cfg(test)]
mod tests {
    use super::matches_current_week;
    use crate::availability::{AvailabilityIndex, AvailabilityMap};
    use crate::date_key::DateKey;
    use crate::day_of_week::DaySelection;

    fn wednesday() -> DateKey {
        DateKey::from_ymd_opt(2024, 6, 5).unwrap()
    }

    #[test]
    fn test_any_available_day_this_week() {
        let map = AvailabilityMap::from_raw([
            ("2024-06-02T00:00:00Z", "Available"),
            ("2024-06-08T00:00:00Z", "Available"),
        ]);
        let index = AvailabilityIndex::new(&map);
        assert!(matches_current_week(&index, &DaySelection::default(), wednesday()));
    }

    #[test]
    fn test_week_edges_are_inclusive() {
        let monday = AvailabilityMap::from_raw([("2024-06-03T00:00:00Z", "Available")]);
        let sunday = AvailabilityMap::from_raw([("2024-06-09T00:00:00Z", "Available")]);
        let previous_sunday = AvailabilityMap::from_raw([("2024-06-02T00:00:00Z", "Available")]);
        let days = DaySelection::default();
        assert!(matches_current_week(&AvailabilityIndex::new(&monday), &days, wednesday()));
        assert!(matches_current_week(&AvailabilityIndex::new(&sunday), &days, wednesday()));
        assert!(!matches_current_week(
            &AvailabilityIndex::new(&previous_sunday),
            &days,
            wednesday()
        ));
    }

    #[test]
    fn test_selected_days_intersect_week() {
        let map = AvailabilityMap::from_raw([
            ("2024-06-04T00:00:00Z", "Available"),
            ("2024-06-08T00:00:00Z", "Reserved"),
        ]);
        let index = AvailabilityIndex::new(&map);
        // Tuesday available
        assert!(matches_current_week(&index, &DaySelection::new([2]), wednesday()));
        // Saturday reserved
        assert!(!matches_current_week(&index, &DaySelection::new([6]), wednesday()));
        assert!(matches_current_week(&index, &DaySelection::new([6, 2]), wednesday()));
    }

    #[test]
    fn test_sunday_today_uses_week_started_monday() {
        let map = AvailabilityMap::from_raw([("2024-06-03T00:00:00Z", "Available")]);
        let index = AvailabilityIndex::new(&map);
        let sunday = DateKey::from_ymd_opt(2024, 6, 9).unwrap();
        assert!(matches_current_week(&index, &DaySelection::default(), sunday));
    }

    #[test]
    fn test_missing_map() {
        assert!(!matches_current_week(
            &AvailabilityIndex::empty(),
            &DaySelection::default(),
            wednesday()
        ));
    }
}
