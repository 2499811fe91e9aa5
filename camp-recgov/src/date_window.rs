//! Month and week arithmetic over `DateKey`s.
//!
//! Weeks are Monday-first and every computation is done on UTC calendar
//! dates, so the same inputs give the same windows on any host.

use crate::date_key::DateKey;
use crate::date_range::DateRange;
use chrono::{Datelike, NaiveDate, Utc, Weekday};

/// Number of days in `month` of `year` (the day before the first of the next month).
///
/// Returns 0 for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    if !(1..=12).contains(&month) {
        return 0;
    }
    if month == 12 {
        return 31;
    }
    NaiveDate::from_ymd_opt(year, month + 1, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(0)
}

/// Canonical `YYYY-MM-DDT00:00:00Z` key matching upstream availability keys.
pub fn iso_day_key(date: DateKey) -> String {
    date.iso_day_key()
}

/// First day of the month containing `date`.
pub fn month_start(date: DateKey) -> DateKey {
    date.add_days(1 - i64::from(date.day()))
}

/// Last day of the month containing `date`.
pub fn month_end(date: DateKey) -> DateKey {
    let last = days_in_month(date.year(), date.month());
    date.add_days(i64::from(last) - i64::from(date.day()))
}

/// Every day of the month containing `date`, in order.
pub fn month_days(date: DateKey) -> DateRange {
    DateRange(month_start(date), month_end(date))
}

/// First day of the month after the one containing `today`.
///
/// This is the display month the dashboard opens on.
pub fn next_month_start(today: DateKey) -> DateKey {
    month_end(today).add_days(1)
}

/// Monday-first week containing `today`, as inclusive (start, end) keys.
pub fn current_week_bounds(today: DateKey) -> (DateKey, DateKey) {
    let offset = match today.weekday() {
        Weekday::Sun => 6,
        other => i64::from(other.number_from_monday()) - 1,
    };
    let start = today.add_days(-offset);
    (start, start.add_days(6))
}

/// Today's UTC calendar date.
pub fn today_utc() -> DateKey {
    Utc::now().date_naive().into()
}
