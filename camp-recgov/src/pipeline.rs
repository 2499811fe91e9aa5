//! Applies a `FilterCriteria` to the campsites of one fetch.
//!
//! Every pass borrows an immutable snapshot of campsites and criteria and
//! returns fresh values, so running the same pass twice gives the same
//! survivors in the same order.

use crate::calendar::{project_calendar, CalendarCell};
use crate::campsite::Campsite;
use crate::classifier::{is_waterfront, SiteClassifier};
use crate::criteria::{FilterCriteria, DRIVEWAY_ATTRIBUTE};
use crate::current_week::matches_current_week;
use crate::date_key::DateKey;
use crate::date_window::month_start;
use crate::day_of_week::matches_consecutive_days;
use crate::range_match::matches_range;
use crate::waterfront::WaterfrontRules;
use log::debug;
use std::collections::{BTreeSet, HashSet};

/// Campground-wide notice worth surfacing once above all campsites.
pub const SEWER_NOTICE: &str = "Please note that there are no sewer hook ups at the campground.";

/// Notices promoted to the global notice list.
const GLOBAL_NOTICES: [&str; 1] = [SEWER_NOTICE];

/// The criteria of one pass, bound to its display month and "today".
#[derive(Debug, Clone, Copy)]
pub struct FilterPipeline<'a> {
    criteria: &'a FilterCriteria,
    waterfront: &'a WaterfrontRules,
    month_start: DateKey,
    today: DateKey,
}

impl<'a> FilterPipeline<'a> {
    /// `month` may be any day of the display month.
    pub fn new(
        criteria: &'a FilterCriteria,
        waterfront: &'a WaterfrontRules,
        month: DateKey,
        today: DateKey,
    ) -> Self {
        FilterPipeline {
            criteria,
            waterfront,
            month_start: month_start(month),
            today,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        self.criteria
    }

    pub fn month_start(&self) -> DateKey {
        self.month_start
    }

    /// True if `campsite` passes every active filter.
    ///
    /// Checks run cheapest first and stop at the first failure: status,
    /// current week or days of the week, date range, type, driveway,
    /// waterfront.
    pub fn matches(&self, campsite: &Campsite) -> bool {
        let criteria = self.criteria;
        if let Some(status) = &criteria.status {
            if campsite.status() != status.as_str() {
                return false;
            }
        }

        let index = campsite.index();
        if criteria.current_week_only {
            if !matches_current_week(&index, &criteria.selected_days, self.today) {
                return false;
            }
        } else if !matches_consecutive_days(&index, &criteria.selected_days, self.month_start) {
            return false;
        }

        if let Some((start, end)) = criteria.date_range {
            if !matches_range(&index, start, end) {
                return false;
            }
        }

        if let Some(site_type) = &criteria.site_type {
            if campsite.site_type() != site_type.as_str() {
                return false;
            }
        }

        if let Some(driveway) = &criteria.driveway {
            if campsite.attribute_value(DRIVEWAY_ATTRIBUTE) != driveway.as_str() {
                return false;
            }
        }

        if criteria.waterfront {
            let campground = criteria.campground.as_deref().unwrap_or_default();
            if !is_waterfront(campsite, campground, self.waterfront) {
                return false;
            }
        }

        true
    }

    /// Campsites passing every active filter, in input order.
    pub fn apply<'c>(&self, campsites: &'c [Campsite]) -> Vec<&'c Campsite> {
        if self.criteria.is_empty() {
            debug!("No active filters, keeping all {} campsites", campsites.len());
            return campsites.iter().collect();
        }
        let survivors: Vec<&Campsite> = campsites
            .iter()
            .filter(|campsite| self.matches(campsite))
            .collect();
        debug!(
            "{} of {} campsites passed the filters for {}",
            survivors.len(),
            campsites.len(),
            self.month_start
        );
        survivors
    }

    /// Calendar grid of `campsite` for the display month.
    pub fn project_calendar(&self, campsite: &Campsite) -> Vec<CalendarCell> {
        project_calendar(
            campsite,
            self.month_start,
            &self.criteria.selected_days,
            self.today,
        )
    }
}

/// Split campsites into (group/SP sites, other sites), keeping order on each side.
pub fn partition_by_group<'c, C>(
    campsites: &[&'c Campsite],
    classifier: &C,
) -> (Vec<&'c Campsite>, Vec<&'c Campsite>)
where
    C: SiteClassifier + ?Sized,
{
    campsites
        .iter()
        .copied()
        .partition(|campsite| classifier.is_group_site(campsite))
}

/// Sorted distinct campsite types, for the type filter options.
pub fn unique_types<'c, I>(campsites: I) -> Vec<String>
where
    I: IntoIterator<Item = &'c Campsite>,
{
    campsites
        .into_iter()
        .filter_map(|campsite| campsite.site_type.as_deref())
        .filter(|site_type| !site_type.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

/// Campground-wide notices carried by any campsite, once each, first seen first.
pub fn global_notices<'c, I>(campsites: I) -> Vec<String>
where
    I: IntoIterator<Item = &'c Campsite>,
{
    let mut seen: HashSet<String> = HashSet::new();
    campsites
        .into_iter()
        .flat_map(|campsite| campsite.notices.iter())
        .filter(|notice| GLOBAL_NOTICES.contains(&notice.text.as_str()))
        .filter(|notice| seen.insert(notice.text.clone()))
        .map(|notice| notice.text.clone())
        .collect()
}
