use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc, Weekday};
use core::ops::Add;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key format used by the availability endpoint: midnight UTC, second precision.
pub const ISO_DAY_FORMAT: &str = "%Y-%m-%dT00:00:00Z";

/// Bare calendar date format, accepted when parsing keys.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// A calendar date normalized to UTC midnight.
///
/// Ordering and equality are those of the (year, month, day) triple. Every
/// availability lookup goes through a `DateKey`, never a wall-clock timestamp,
/// so a local timezone can never shift a lookup onto the neighbouring day.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Create a DateKey from a year/month/day triple, `None` if the date does not exist.
    pub fn from_ymd_opt(year: i32, month: u32, day: u32) -> Option<DateKey> {
        NaiveDate::from_ymd_opt(year, month, day).map(DateKey)
    }

    /// Parse an upstream availability key.
    ///
    /// Accepts RFC 3339 date-times (`2024-06-03T00:00:00Z`), which are
    /// converted to their UTC calendar date, and bare `2024-06-03` dates.
    pub fn parse(raw: &str) -> Option<DateKey> {
        let raw = raw.trim();
        if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
            return Some(DateKey(date_time.with_timezone(&Utc).date_naive()));
        }
        NaiveDate::parse_from_str(raw, DAY_FORMAT).ok().map(DateKey)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Day of the week with Sunday = 0 through Saturday = 6.
    pub fn weekday_from_sunday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// True when both keys fall in the same calendar month.
    pub fn same_month(&self, other: &DateKey) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// The canonical upstream key, e.g. `2024-06-03T00:00:00Z`.
    pub fn iso_day_key(&self) -> String {
        self.0.format(ISO_DAY_FORMAT).to_string()
    }

    pub fn add_days(self, days: i64) -> DateKey {
        self + TimeDelta::days(days)
    }

    /// `None` when the result falls outside the representable calendar.
    pub fn checked_add_days(self, days: i64) -> Option<DateKey> {
        TimeDelta::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(DateKey)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(value: NaiveDate) -> Self {
        DateKey(value)
    }
}

impl From<DateKey> for NaiveDate {
    fn from(value: DateKey) -> Self {
        value.0
    }
}

impl From<DateKey> for String {
    fn from(value: DateKey) -> Self {
        value.0.format(DAY_FORMAT).to_string()
    }
}

impl TryFrom<String> for DateKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        DateKey::parse(&value).ok_or_else(|| format!("not a calendar date: {value}"))
    }
}

impl Add<TimeDelta> for DateKey {
    type Output = Self;

    fn add(self, rhs: TimeDelta) -> Self::Output {
        DateKey(self.0 + rhs)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::DateKey;
    use chrono::{NaiveDate, Weekday};

    #[test]
    fn test_parse_upstream_key() {
        let key = DateKey::parse("2024-06-03T00:00:00Z").unwrap();
        assert_eq!(key, DateKey::from_ymd_opt(2024, 6, 3).unwrap());
        assert_eq!(key.weekday(), Weekday::Mon);
        assert_eq!(key.weekday_from_sunday(), 1);
    }

    #[test]
    fn test_parse_normalizes_offsets_to_utc() {
        // 22:00 on the 2nd at UTC-05:00 is already the 3rd in UTC
        let key = DateKey::parse("2024-06-02T22:00:00-05:00").unwrap();
        assert_eq!(key, DateKey::from_ymd_opt(2024, 6, 3).unwrap());
    }

    #[test]
    fn test_parse_bare_date_and_garbage() {
        assert_eq!(
            DateKey::parse("2024-07-10"),
            DateKey::from_ymd_opt(2024, 7, 10)
        );
        assert_eq!(DateKey::parse("next tuesday"), None);
        assert_eq!(DateKey::parse("2024-02-30T00:00:00Z"), None);
    }

    #[test]
    fn test_iso_day_key_has_no_milliseconds() {
        let key = DateKey::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(key.iso_day_key(), "2024-01-05T00:00:00Z");
        assert_eq!(key.to_string(), "2024-01-05");
    }

    #[test]
    fn test_ordering_follows_triple() {
        let a = DateKey::from_ymd_opt(2023, 12, 31).unwrap();
        let b = DateKey::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(a < b);
        assert_eq!(a.add_days(1), b);
        assert!(!a.same_month(&b));
    }

    #[test]
    fn test_serde_as_string() {
        let key = DateKey::from_ymd_opt(2024, 6, 3).unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2024-06-03\"");
        let back: DateKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
        let naive: NaiveDate = back.into();
        assert_eq!(naive, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
    }
}
