use crate::availability::AvailabilityIndex;
use crate::date_key::DateKey;
use crate::date_window::month_days;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Selected days of the week, Sunday = 0 through Saturday = 6.
///
/// Stored sorted; values above 6 are dropped on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<u32>", into = "Vec<u32>")]
pub struct DaySelection(BTreeSet<u32>);

impl DaySelection {
    pub fn new<I: IntoIterator<Item = u32>>(days: I) -> Self {
        DaySelection(days.into_iter().filter(|day| *day <= 6).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, day: u32) -> bool {
        self.0.contains(&day)
    }

    /// True when the selection is empty or holds `date`'s weekday.
    pub fn admits(&self, date: &DateKey) -> bool {
        self.is_empty() || self.contains(date.weekday_from_sunday())
    }

    /// Lowest selected day.
    pub fn first(&self) -> Option<u32> {
        self.0.first().copied()
    }

    /// Selected days in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<u32> for DaySelection {
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
        DaySelection::new(iter)
    }
}

impl From<Vec<u32>> for DaySelection {
    fn from(value: Vec<u32>) -> Self {
        DaySelection::new(value)
    }
}

impl From<DaySelection> for Vec<u32> {
    fn from(value: DaySelection) -> Self {
        value.0.into_iter().collect()
    }
}

/// True if any date in the month of `month_start` falling on `day_of_week`
/// (Sunday = 0) is Available.
pub fn matches_single_day(
    index: &AvailabilityIndex<'_>,
    day_of_week: u32,
    month_start: DateKey,
) -> bool {
    month_days(month_start)
        .any(|date| date.weekday_from_sunday() == day_of_week && index.is_available(date))
}

/// True if, for some week of the month, every selected weekday is Available.
///
/// Each date falling on the lowest selected day anchors a candidate week;
/// the other days are reached at offset `(day - lowest + 7) % 7` from the
/// anchor. A candidate fails as soon as one of its days leaves the month or
/// is not Available. This is a weekly recurrence of the selected weekdays,
/// not a run of back-to-back calendar dates.
///
/// A single selected day behaves like [`matches_single_day`]; an empty
/// selection matches everything.
pub fn matches_consecutive_days(
    index: &AvailabilityIndex<'_>,
    days: &DaySelection,
    month_start: DateKey,
) -> bool {
    let Some(lowest) = days.first() else {
        return true;
    };
    if days.len() < 2 {
        return matches_single_day(index, lowest, month_start);
    }
    month_days(month_start)
        .filter(|anchor| anchor.weekday_from_sunday() == lowest)
        .any(|anchor| {
            days.iter().all(|day| {
                let offset = (day + 7 - lowest) % 7;
                let checked = anchor.add_days(i64::from(offset));
                checked.same_month(&anchor) && index.is_available(checked)
            })
        })
}
