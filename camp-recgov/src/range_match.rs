use crate::availability::AvailabilityIndex;
use crate::date_key::DateKey;
use crate::date_range::DateRange;

/// True if every day from `start` through `end` (inclusive) is Available.
///
/// Unknown days count as unavailable. An inverted range has no day to
/// confirm and does not match.
pub fn matches_range(index: &AvailabilityIndex<'_>, start: DateKey, end: DateKey) -> bool {
    if start > end {
        return false;
    }
    DateRange(start, end).all(|date| index.is_available(date))
}

#[cfg(test)]
mod tests {
    use super::matches_range;
    use crate::availability::{AvailabilityIndex, AvailabilityMap};
    use crate::date_key::DateKey;

    fn key(year: i32, month: u32, day: u32) -> DateKey {
        DateKey::from_ymd_opt(year, month, day).unwrap()
    }

    fn july_stay() -> AvailabilityMap {
        AvailabilityMap::from_raw([
            ("2024-07-09T00:00:00Z", "Reserved"),
            ("2024-07-10T00:00:00Z", "Available"),
            ("2024-07-11T00:00:00Z", "Available"),
            ("2024-07-12T00:00:00Z", "Available"),
        ])
    }

    #[test]
    fn test_fully_available_range() {
        let map = july_stay();
        let index = AvailabilityIndex::new(&map);
        assert!(matches_range(&index, key(2024, 7, 10), key(2024, 7, 12)));
        assert!(matches_range(&index, key(2024, 7, 11), key(2024, 7, 11)));
    }

    #[test]
    fn test_unknown_day_breaks_range() {
        let map = july_stay();
        let index = AvailabilityIndex::new(&map);
        assert!(!matches_range(&index, key(2024, 7, 10), key(2024, 7, 13)));
    }

    #[test]
    fn test_widening_never_turns_false_into_true() {
        let map = july_stay();
        let index = AvailabilityIndex::new(&map);
        let start = key(2024, 7, 10);
        let mut previous = matches_range(&index, start, start);
        for widen in 1..6 {
            let current = matches_range(&index, start, start.add_days(widen));
            assert!(previous || !current);
            previous = current;
        }
        assert!(!previous);
    }

    #[test]
    fn test_inverted_range() {
        let map = july_stay();
        let index = AvailabilityIndex::new(&map);
        assert!(!matches_range(&index, key(2024, 7, 12), key(2024, 7, 10)));
    }

    #[test]
    fn test_range_across_months() {
        let map = AvailabilityMap::from_raw([
            ("2024-06-30T00:00:00Z", "Available"),
            ("2024-07-01T00:00:00Z", "Available"),
        ]);
        let index = AvailabilityIndex::new(&map);
        assert!(matches_range(&index, key(2024, 6, 30), key(2024, 7, 1)));
    }
}
