use crate::date_key::DateKey;
use crate::day_of_week::DaySelection;
use serde::{Deserialize, Serialize};

/// Attribute compared against the driveway filter.
pub const DRIVEWAY_ATTRIBUTE: &str = "Driveway Entry";

/// Dropdown value meaning "do not filter on this field".
pub const ALL_CHOICE: &str = "all";

/// The user's filter selections for one filter pass.
///
/// `None` fields and `false` flags are inactive; the default value has no
/// active filter and leaves every campsite in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Exact campsite type, e.g. "STANDARD ELECTRIC".
    #[serde(default)]
    pub site_type: Option<String>,
    /// Exact campsite status, usually "Open".
    #[serde(default)]
    pub status: Option<String>,
    /// Exact `Driveway Entry` attribute value, e.g. "Pull-Through".
    #[serde(default)]
    pub driveway: Option<String>,
    /// Keep only waterfront sites of `campground`.
    #[serde(default)]
    pub waterfront: bool,
    /// Campground name the waterfront rules are looked up by.
    #[serde(default)]
    pub campground: Option<String>,
    #[serde(default)]
    pub selected_days: DaySelection,
    /// Inclusive stay that must be Available on every day.
    #[serde(default)]
    pub date_range: Option<(DateKey, DateKey)>,
    /// Match against the current week instead of the display month.
    #[serde(default)]
    pub current_week_only: bool,
}

/// Map a dropdown value to a filter value; `"all"` and blanks mean no filter.
pub fn choice(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case(ALL_CHOICE) {
        None
    } else {
        Some(value.to_string())
    }
}

impl FilterCriteria {
    pub fn with_site_type(mut self, value: &str) -> Self {
        self.site_type = choice(value);
        self
    }

    pub fn with_status(mut self, value: &str) -> Self {
        self.status = choice(value);
        self
    }

    pub fn with_driveway(mut self, value: &str) -> Self {
        self.driveway = choice(value);
        self
    }

    pub fn with_waterfront(mut self, campground: &str) -> Self {
        self.waterfront = true;
        self.campground = Some(campground.to_string());
        self
    }

    pub fn with_days(mut self, days: DaySelection) -> Self {
        self.selected_days = days;
        self
    }

    pub fn with_date_range(mut self, start: DateKey, end: DateKey) -> Self {
        self.date_range = Some((start, end));
        self
    }

    pub fn with_current_week(mut self) -> Self {
        self.current_week_only = true;
        self
    }

    /// True when no filter is active.
    pub fn is_empty(&self) -> bool {
        self.site_type.is_none()
            && self.status.is_none()
            && self.driveway.is_none()
            && !self.waterfront
            && self.selected_days.is_empty()
            && self.date_range.is_none()
            && !self.current_week_only
    }
}
