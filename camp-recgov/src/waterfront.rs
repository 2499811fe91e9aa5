use crate::error::{CampError, Result};
use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Embedded rule table for the campgrounds we know the waterfront sites of.
pub static WATERFRONT_CSV: &str = include_str!("../../fixtures/waterfront.csv");

/// Which site numbers inside a range count.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Any,
    Odd,
    Even,
}

impl Parity {
    fn admits(&self, site_number: i64) -> bool {
        match self {
            Parity::Any => true,
            Parity::Odd => site_number % 2 != 0,
            Parity::Even => site_number % 2 == 0,
        }
    }
}

/// Sites `low..=high` of `campground` with the given parity are waterfront.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct WaterfrontRule {
    pub campground: String,
    pub low: i64,
    pub high: i64,
    pub parity: Parity,
}

impl WaterfrontRule {
    pub fn admits(&self, site_number: i64) -> bool {
        (self.low..=self.high).contains(&site_number) && self.parity.admits(site_number)
    }
}

/// Waterfront rules keyed by campground name.
///
/// The site-number ranges are an approximation of which sites sit on the
/// water, maintained by hand per campground. A campground without rules has
/// no waterfront sites.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct WaterfrontRules {
    rules: HashMap<String, Vec<WaterfrontRule>>,
}

impl WaterfrontRules {
    /// Rules from the embedded table.
    pub fn builtin() -> Result<WaterfrontRules> {
        WaterfrontRules::parse_waterfront_csv(WATERFRONT_CSV)
    }

    /// Parse a rule table.
    ///
    /// Expected CSV columns: campground, low, high, parity (any/odd/even)
    pub fn parse_waterfront_csv(csv_object: &str) -> Result<WaterfrontRules> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(csv_object.as_bytes());
        let mut rules = Vec::new();
        for row in rdr.deserialize() {
            let rule: WaterfrontRule = row?;
            if rule.low > rule.high {
                return Err(CampError::InvalidRule(format!(
                    "{}: low {} is above high {}",
                    rule.campground, rule.low, rule.high
                )));
            }
            rules.push(rule);
        }
        Ok(rules.into_iter().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Campground names with at least one rule, sorted.
    pub fn campgrounds(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn rules_for(&self, campground: &str) -> &[WaterfrontRule] {
        self.rules
            .get(campground)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// True if some rule of `campground` admits `site_number`.
    pub fn is_waterfront_site(&self, campground: &str, site_number: i64) -> bool {
        self.rules_for(campground)
            .iter()
            .any(|rule| rule.admits(site_number))
    }
}

impl FromIterator<WaterfrontRule> for WaterfrontRules {
    fn from_iter<T: IntoIterator<Item = WaterfrontRule>>(iter: T) -> Self {
        let mut rules: HashMap<String, Vec<WaterfrontRule>> = HashMap::new();
        for rule in iter {
            rules.entry(rule.campground.clone()).or_default().push(rule);
        }
        WaterfrontRules { rules }
    }
}

#[cfg(test)]
mod tests {
    use super::{Parity, WaterfrontRule, WaterfrontRules};
    use crate::error::CampError;

    #[test]
    fn test_builtin_rules() {
        let rules = WaterfrontRules::builtin().unwrap();
        assert_eq!(rules.campgrounds(), vec!["Anderson Road", "Seven Points"]);
        assert_eq!(
            rules.rules_for("Seven Points"),
            &[WaterfrontRule {
                campground: "Seven Points".to_string(),
                low: 11,
                high: 35,
                parity: Parity::Odd,
            }]
        );
    }

    #[test]
    fn test_anderson_road_any_parity() {
        let rules = WaterfrontRules::builtin().unwrap();
        for site in 1..=9 {
            assert!(rules.is_waterfront_site("Anderson Road", site));
        }
        assert!(!rules.is_waterfront_site("Anderson Road", 0));
        assert!(!rules.is_waterfront_site("Anderson Road", 10));
    }

    #[test]
    fn test_seven_points_odd_only() {
        let rules = WaterfrontRules::builtin().unwrap();
        assert!(rules.is_waterfront_site("Seven Points", 11));
        assert!(rules.is_waterfront_site("Seven Points", 21));
        assert!(rules.is_waterfront_site("Seven Points", 35));
        assert!(!rules.is_waterfront_site("Seven Points", 22));
        assert!(!rules.is_waterfront_site("Seven Points", 37));
        assert!(!rules.is_waterfront_site("Seven Points", 9));
    }

    #[test]
    fn test_unknown_campground_has_no_waterfront() {
        let rules = WaterfrontRules::builtin().unwrap();
        for site in -5..100 {
            assert!(!rules.is_waterfront_site("Cedar Creek", site));
            assert!(!rules.is_waterfront_site("seven points", site));
        }
    }

    #[test]
    fn test_custom_table_with_two_ranges() {
        let csv_data = "\
campground,low,high,parity
Lakeview, 2, 10, even
Lakeview, 40, 44, any
";
        let rules = WaterfrontRules::parse_waterfront_csv(csv_data).unwrap();
        assert!(rules.is_waterfront_site("Lakeview", 4));
        assert!(!rules.is_waterfront_site("Lakeview", 5));
        assert!(rules.is_waterfront_site("Lakeview", 41));
        assert!(!rules.is_waterfront_site("Seven Points", 21));
    }

    #[test]
    fn test_rejects_inverted_rule() {
        let csv_data = "campground,low,high,parity\nLakeview,10,2,any\n";
        let err = WaterfrontRules::parse_waterfront_csv(csv_data).unwrap_err();
        assert!(matches!(err, CampError::InvalidRule(_)));
    }

    #[test]
    fn test_rejects_unknown_parity() {
        let csv_data = "campground,low,high,parity\nLakeview,1,2,prime\n";
        let err = WaterfrontRules::parse_waterfront_csv(csv_data).unwrap_err();
        assert!(matches!(err, CampError::Csv(_)));
    }

    #[test]
    fn test_empty_table() {
        let rules = WaterfrontRules::parse_waterfront_csv("campground,low,high,parity\n").unwrap();
        assert!(rules.is_empty());
        assert!(rules.rules_for("Seven Points").is_empty());
    }
}
