use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A consolidated movie record assembled from up to two metadata providers.
///
/// Field names on the wire follow the primary provider's flat record
/// (`Title`, `Year`, `imdbRating`, ...). Fields that only the secondary
/// provider knows about (tagline, budget, production companies, ...) are
/// carried through untyped in `extra`. The record is built once per
/// successful lookup and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "Plot", default)]
    pub plot: Option<String>,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: Option<String>,
    #[serde(rename = "Runtime", default)]
    pub runtime: Option<String>,
    #[serde(rename = "Director", default)]
    pub director: Option<String>,
    #[serde(rename = "Actors", default)]
    pub actors: Option<String>,
    #[serde(rename = "Genre", default)]
    pub genre: Option<String>,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
    /// Cross-reference identifier used to locate the same title in the
    /// secondary provider's catalog and for streaming lookups.
    #[serde(rename = "imdbID", default)]
    pub imdb_id: Option<String>,
    /// Secondary provider's internal identifier, present only when the
    /// cross-reference resolved. Unlocks similar-title queries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tmdb_id: Option<u64>,
    /// Secondary-only fields preserved verbatim from the merge.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MovieRecord {
    /// Year string for display, "N/A" when the provider omitted it.
    pub fn display_year(&self) -> &str {
        self.year.as_deref().unwrap_or("N/A")
    }

    pub fn rating_or_na(&self) -> &str {
        self.imdb_rating.as_deref().unwrap_or("N/A")
    }

    /// Poster URL, filtering the primary provider's literal "N/A" marker.
    pub fn poster_url(&self) -> Option<&str> {
        self.poster.as_deref().filter(|p| !p.is_empty() && *p != "N/A")
    }

    /// String-valued field carried through from the secondary provider.
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}
