//! Shared utility functions for the camp crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, NaiveDate};

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
    }

    /// Parse a month as "YYYY-MM" (or any "YYYY-MM-DD" inside it) into its
    /// first day.
    pub fn parse_month(s: &str) -> anyhow::Result<NaiveDate> {
        let s = s.trim();
        let date = match NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => parse_date(s)?,
        };
        NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
            .ok_or_else(|| anyhow::anyhow!("No first day for month {}", s))
    }

}

/// Weekday list parsing, Sunday = 0 through Saturday = 6
pub mod days {
    use crate::error::DayError;

    const NAMES: [&str; 7] = [
        "sunday",
        "monday",
        "tuesday",
        "wednesday",
        "thursday",
        "friday",
        "saturday",
    ];

    /// Parse one weekday given as a number (0-6) or a name of at least three
    /// letters ("Sat", "thurs", "saturday").
    pub fn parse_day(s: &str) -> Result<u32, DayError> {
        let s = s.trim();
        if let Ok(number) = s.parse::<u32>() {
            return if number <= 6 {
                Ok(number)
            } else {
                Err(DayError::OutOfRange(number))
            };
        }
        let lower = s.to_ascii_lowercase();
        NAMES
            .iter()
            .position(|name| lower.len() >= 3 && name.starts_with(lower.as_str()))
            .map(|position| position as u32)
            .ok_or_else(|| DayError::UnknownDay(s.to_string()))
    }

    /// Parse a comma separated weekday list such as "5,6" or "fri,sat".
    /// Blank entries are skipped; order and duplicates are kept as given.
    pub fn parse_days(s: &str) -> Result<Vec<u32>, DayError> {
        s.split(',')
            .filter(|part| !part.trim().is_empty())
            .map(parse_day)
            .collect()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_day() {
            assert_eq!(parse_day("0").unwrap(), 0);
            assert_eq!(parse_day("Sat").unwrap(), 6);
            assert_eq!(parse_day("wednesday").unwrap(), 3);
            assert_eq!(parse_day("7"), Err(DayError::OutOfRange(7)));
            assert_eq!(parse_day("thurs").unwrap(), 4);
            assert_eq!(parse_day("su"), Err(DayError::UnknownDay("su".to_string())));
            assert!(parse_day("monkey").is_err());
            assert!(parse_day("sunflower").is_err());
            assert!(parse_day("saturdays").is_err());
        }

        #[test]
        fn test_parse_days() {
            assert_eq!(parse_days("5,6").unwrap(), vec![5, 6]);
            assert_eq!(parse_days("fri, sat").unwrap(), vec![5, 6]);
            assert_eq!(parse_days("").unwrap(), Vec::<u32>::new());
            assert!(parse_days("fri,funday").is_err());
        }
    }
}

/// Error types
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, PartialEq, Eq)]
    pub enum DayError {
        #[error("Day of week {0} is out of range (0-6, Sunday = 0)")]
        OutOfRange(u32),

        #[error("Unknown day of week: {0}")]
        UnknownDay(String),
    }
}
