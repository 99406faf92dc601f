use serde::{Deserialize, Serialize};

/// Compact listing entry returned by typeahead suggestions, trending,
/// genre discovery, and similar-title queries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    /// Release year, "N/A" when the provider had no release date.
    pub year: String,
    pub poster: Option<String>,
    pub rating: f64,
}
