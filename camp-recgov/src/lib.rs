//! Campsite availability matching and filtering for recreation.gov data.
//!
//! Campsite search results are merged with a campground's month
//! availability, filtered against a `FilterCriteria` and projected onto a
//! calendar grid. All matching works on UTC calendar dates (`DateKey`).

pub mod availability;
pub mod calendar;
pub mod campsite;
pub mod classifier;
pub mod criteria;
pub mod current_week;
pub mod date_key;
pub mod date_range;
pub mod date_window;
pub mod day_of_week;
pub mod error;
pub mod pipeline;
pub mod range_match;
#[cfg(feature = "api")]
pub mod recgov;
pub mod waterfront;
