use crate::availability::{AvailabilityIndex, AvailabilityMap};
use crate::error::{CampError, Result};
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Placeholder returned for attributes a campsite does not carry.
pub const MISSING_ATTRIBUTE: &str = "N/A";

/// Campsite status string for sites that can be booked.
pub const OPEN_STATUS: &str = "Open";

/// Attribute names whose `Yes` value is shown as an amenity, with their display label.
const YES_AMENITIES: [(&str, &str); 3] = [
    ("Campfire Allowed", "Campfire"),
    ("Shade", "Shade"),
    ("Pets Allowed", "Pets Allowed"),
];

/// One `{attribute_name, attribute_category, attribute_value}` entry.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(default)]
    pub attribute_name: String,
    #[serde(default)]
    pub attribute_category: String,
    #[serde(default)]
    pub attribute_value: String,
}

#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct Notice {
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type", default)]
    pub notice_type: Option<String>,
}

/// One reservable unit within a campground, as returned by the campsite
/// search endpoint, with its availability merged in.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct Campsite {
    #[serde(default)]
    pub campsite_id: String,
    /// Site label, usually a number such as "21" but sometimes "GRP A".
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub site_type: Option<String>,
    #[serde(default)]
    pub campsite_reserve_type: Option<String>,
    #[serde(default)]
    pub campsite_status: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub number_of_ratings: u32,
    #[serde(default)]
    pub notices: Vec<Notice>,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub accessible: bool,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub reservable: bool,
    #[serde(default)]
    pub preview_image_url: Option<String>,
    #[serde(default)]
    pub availability: AvailabilityMap,
}

/// Accepts `true`, `"true"` and null/absent (false); upstream is not consistent.
fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Bool(flag)) => flag,
        Some(serde_json::Value::String(text)) => text.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

impl Campsite {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn site_type(&self) -> &str {
        self.site_type.as_deref().unwrap_or_default()
    }

    pub fn reserve_type(&self) -> &str {
        self.campsite_reserve_type.as_deref().unwrap_or_default()
    }

    pub fn status(&self) -> &str {
        self.campsite_status.as_deref().unwrap_or_default()
    }

    pub fn is_open(&self) -> bool {
        self.status() == OPEN_STATUS
    }

    /// Value of the first attribute called `name`, or `"N/A"`.
    pub fn attribute_value(&self, name: &str) -> &str {
        self.attributes
            .iter()
            .find(|attribute| attribute.attribute_name == name)
            .map(|attribute| attribute.attribute_value.as_str())
            .unwrap_or(MISSING_ATTRIBUTE)
    }

    /// Site label as an integer, when it is one ("21" but not "21A" or "GRP").
    pub fn site_number(&self) -> Option<i64> {
        self.name().trim().parse::<i64>().ok()
    }

    /// Display list of features: `Y` amenities (without the " Hookup"
    /// suffix), then campfire/shade/pets when `Yes`, then accessibility.
    pub fn amenities(&self) -> Vec<String> {
        let mut amenities: Vec<String> = self
            .attributes
            .iter()
            .filter(|attribute| {
                attribute.attribute_category == "amenities" && attribute.attribute_value == "Y"
            })
            .map(|attribute| attribute.attribute_name.replace(" Hookup", ""))
            .collect();
        for (attribute_name, label) in YES_AMENITIES {
            if self.attribute_value(attribute_name) == "Yes" {
                amenities.push(label.to_string());
            }
        }
        if self.accessible {
            amenities.push("Accessible".to_string());
        }
        amenities
    }

    pub fn index(&self) -> AvailabilityIndex<'_> {
        AvailabilityIndex::new(&self.availability)
    }
}

/// Body of the campsite search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub campsites: Vec<Campsite>,
}

/// Availability of one campsite as returned by the campground month endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampsiteAvailability {
    #[serde(default)]
    pub campsite_id: Option<String>,
    #[serde(default)]
    pub availabilities: AvailabilityMap,
}

/// Body of the campground month availability endpoint, keyed by campsite id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    #[serde(default)]
    pub campsites: HashMap<String, CampsiteAvailability>,
}

impl SearchResponse {
    /// Attach each campsite's availability by `campsite_id`.
    ///
    /// Search order is kept. Campsites missing from the availability
    /// response get an empty map; availability entries for campsites the
    /// search did not return are dropped.
    pub fn merge(self, mut availability: AvailabilityResponse) -> Vec<Campsite> {
        let campsites: Vec<Campsite> = self
            .campsites
            .into_iter()
            .map(|mut campsite| {
                campsite.availability = availability
                    .campsites
                    .remove(&campsite.campsite_id)
                    .map(|site| site.availabilities)
                    .unwrap_or_default();
                campsite
            })
            .collect();
        if !availability.campsites.is_empty() {
            debug!(
                "{} availability entries had no matching campsite",
                availability.campsites.len()
            );
        }
        campsites
    }
}

/// Parse `json` and check it is an object whose `campsites` member is an
/// array (search) or an object (availability).
fn response_value(json: &str, kind: &'static str, as_array: bool) -> Result<serde_json::Value> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let well_formed = value
        .get("campsites")
        .is_some_and(|campsites| if as_array { campsites.is_array() } else { campsites.is_object() });
    if !value.is_object() || !well_formed {
        let expected = if as_array { "array" } else { "object" };
        return Err(CampError::MalformedResponse(kind, expected));
    }
    Ok(value)
}

/// Campsites from a search response body, or from a JSON array of
/// already merged campsites.
pub fn parse_campsites(json: &str) -> Result<Vec<Campsite>> {
    if json.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(json)?);
    }
    let value = response_value(json, "search", true)?;
    Ok(serde_json::from_value::<SearchResponse>(value)?.campsites)
}

/// Campsites from a search response body merged with an availability response body.
pub fn parse_merged(search_json: &str, availability_json: &str) -> Result<Vec<Campsite>> {
    let search: SearchResponse = serde_json::from_value(response_value(search_json, "search", true)?)?;
    let availability: AvailabilityResponse =
        serde_json::from_value(response_value(availability_json, "availability", false)?)?;
    Ok(search.merge(availability))
}
