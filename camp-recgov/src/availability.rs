use crate::date_key::DateKey;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::{BTreeMap, HashMap};

/// Reservation status of one campsite on one day.
///
/// `Unknown` covers both dates missing from the upstream map and status
/// strings this crate does not recognize.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize)]
pub enum AvailabilityStatus {
    Available,
    Reserved,
    #[serde(rename = "Not Available")]
    NotAvailable,
    #[default]
    Unknown,
}

impl AvailabilityStatus {
    /// Short marker used by the calendar grid: `A`, `X` or `?`.
    pub fn marker(&self) -> char {
        match self {
            AvailabilityStatus::Available => 'A',
            AvailabilityStatus::Reserved | AvailabilityStatus::NotAvailable => 'X',
            AvailabilityStatus::Unknown => '?',
        }
    }
}

impl From<&str> for AvailabilityStatus {
    fn from(value: &str) -> Self {
        match value.trim() {
            "Available" => AvailabilityStatus::Available,
            "Reserved" => AvailabilityStatus::Reserved,
            "Not Available" => AvailabilityStatus::NotAvailable,
            _ => AvailabilityStatus::Unknown,
        }
    }
}

/// Per-date availability for one campsite.
///
/// Keys need not be contiguous. Entries whose key is not a date are dropped
/// when the map is built, so they read back as `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(
    from = "Option<HashMap<String, serde_json::Value>>",
    into = "BTreeMap<String, AvailabilityStatus>"
)]
pub struct AvailabilityMap(BTreeMap<DateKey, AvailabilityStatus>);

impl AvailabilityMap {
    pub fn new() -> Self {
        AvailabilityMap(BTreeMap::new())
    }

    pub fn insert(&mut self, date: DateKey, status: AvailabilityStatus) {
        self.0.insert(date, status);
    }

    pub fn get(&self, date: &DateKey) -> Option<AvailabilityStatus> {
        self.0.get(date).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, DateKey, AvailabilityStatus> {
        self.0.iter()
    }

    /// Build a map from raw upstream `key -> status` strings.
    pub fn from_raw<'s, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'s str, &'s str)>,
    {
        let mut map = AvailabilityMap::new();
        let mut skipped = 0usize;
        for (key, status) in entries {
            match DateKey::parse(key) {
                Some(date) => map.insert(date, AvailabilityStatus::from(status)),
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            debug!("Skipped {} availability entries with unparseable dates", skipped);
        }
        map
    }
}

impl FromIterator<(DateKey, AvailabilityStatus)> for AvailabilityMap {
    fn from_iter<T: IntoIterator<Item = (DateKey, AvailabilityStatus)>>(iter: T) -> Self {
        AvailabilityMap(iter.into_iter().collect())
    }
}

impl From<Option<HashMap<String, serde_json::Value>>> for AvailabilityMap {
    fn from(value: Option<HashMap<String, serde_json::Value>>) -> Self {
        let Some(raw) = value else {
            return AvailabilityMap::new();
        };
        AvailabilityMap::from_raw(
            raw.iter()
                .map(|(key, status)| (key.as_str(), status.as_str().unwrap_or_default())),
        )
    }
}

impl From<AvailabilityMap> for BTreeMap<String, AvailabilityStatus> {
    fn from(value: AvailabilityMap) -> Self {
        value
            .0
            .into_iter()
            .map(|(date, status)| (date.iso_day_key(), status))
            .collect()
    }
}

/// Read-only point and range queries over one campsite's availability.
///
/// An index built without a map answers `Unknown` for every date.
#[derive(Debug, Clone, Copy, Default)]
pub struct AvailabilityIndex<'a> {
    map: Option<&'a AvailabilityMap>,
}

impl<'a> AvailabilityIndex<'a> {
    pub fn new(map: &'a AvailabilityMap) -> Self {
        AvailabilityIndex { map: Some(map) }
    }

    pub fn empty() -> Self {
        AvailabilityIndex { map: None }
    }

    pub fn status_on(&self, date: DateKey) -> AvailabilityStatus {
        self.map
            .and_then(|map| map.get(&date))
            .unwrap_or_default()
    }

    pub fn is_available(&self, date: DateKey) -> bool {
        self.status_on(date) == AvailabilityStatus::Available
    }

    /// Available dates inside `[start, end]`, ascending. Only the dates
    /// present in the map are visited.
    pub fn available_between(
        &self,
        start: DateKey,
        end: DateKey,
    ) -> impl Iterator<Item = DateKey> + 'a {
        let entries = match self.map {
            Some(map) if start <= end => Some(map.0.range(start..=end)),
            _ => None,
        };
        entries
            .into_iter()
            .flatten()
            .filter(|(_, status)| **status == AvailabilityStatus::Available)
            .map(|(date, _)| *date)
    }
}

impl<'a> From<&'a AvailabilityMap> for AvailabilityIndex<'a> {
    fn from(value: &'a AvailabilityMap) -> Self {
        AvailabilityIndex::new(value)
    }
}
