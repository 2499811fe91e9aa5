/// Error types for the camp-recgov library
use thiserror::Error;

/// Main error type for loading campground data and rule tables.
///
/// Matching and filtering never fail; these cover reading inputs.
#[derive(Error, Debug)]
pub enum CampError {
    /// Failed to parse a JSON document
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to read an input file
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON document without the expected `campsites` collection
    #[error("Malformed {0} response: expected an object with a campsites {1}")]
    MalformedResponse(&'static str, &'static str),

    /// A waterfront rule row that cannot describe any site
    #[error("Invalid waterfront rule: {0}")]
    InvalidRule(String),

    /// HTTP request failed
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status on every attempt
    #[cfg(feature = "api")]
    #[error("Upstream returned {status} for {url}")]
    BadStatus { status: u16, url: String },
}

/// Type alias for Results using CampError
pub type Result<T, E = CampError> = std::result::Result<T, E>;
