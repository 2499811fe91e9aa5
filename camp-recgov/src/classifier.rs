//! Campsite classification heuristics.
//!
//! Neither classification comes from authoritative metadata: group sites are
//! guessed from naming conventions and waterfront sites from per-campground
//! site-number ranges.

use crate::campsite::Campsite;
use crate::waterfront::WaterfrontRules;

/// Decides which campsites are shown in the "SP/Group" section.
pub trait SiteClassifier {
    fn is_group_site(&self, campsite: &Campsite) -> bool;
}

/// The default classifier, see [`is_group_site`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NameHeuristic;

impl SiteClassifier for NameHeuristic {
    fn is_group_site(&self, campsite: &Campsite) -> bool {
        is_group_site(campsite)
    }
}

impl<F> SiteClassifier for F
where
    F: Fn(&Campsite) -> bool,
{
    fn is_group_site(&self, campsite: &Campsite) -> bool {
        self(campsite)
    }
}

/// True if the type, name or reserve type mentions `GROUP`, or the type or
/// name mentions `SP` (case-insensitive).
pub fn is_group_site(campsite: &Campsite) -> bool {
    let site_type = campsite.site_type().to_uppercase();
    let name = campsite.name().to_uppercase();
    let reserve_type = campsite.reserve_type().to_uppercase();
    site_type.contains("GROUP")
        || site_type.contains("SP")
        || name.contains("GROUP")
        || name.contains("SP")
        || reserve_type.contains("GROUP")
}

/// True if the site label is an integer admitted by `campground_name`'s rules.
///
/// Labels that are not integers are never waterfront.
pub fn is_waterfront(campsite: &Campsite, campground_name: &str, rules: &WaterfrontRules) -> bool {
    campsite
        .site_number()
        .is_some_and(|number| rules.is_waterfront_site(campground_name, number))
}
