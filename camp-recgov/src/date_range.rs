use crate::date_key::DateKey;
use std::mem::replace;

/// A date range iterator that yields each date from the start date
/// through the end date (inclusive).
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange(pub DateKey, pub DateKey);

impl DateRange {
    /// True when `date` lies inside the range, bounds included.
    pub fn contains(&self, date: &DateKey) -> bool {
        self.0 <= *date && *date <= self.1
    }
}

impl Iterator for DateRange {
    type Item = DateKey;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 > self.1 {
            return None;
        }
        match self.0.checked_add_days(1) {
            Some(next) => Some(replace(&mut self.0, next)),
            None => {
                // Last representable day: yield it and leave the range empty.
                let last = self.0;
                self.1 = last.checked_add_days(-1)?;
                Some(last)
            }
        }
    }
}
