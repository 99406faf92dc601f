use async_trait::async_trait;
use movie_meta_models::{MovieSummary, RawOffer};
use serde_json::{Map, Value};

use crate::outcome::ProviderOutcome;

/// The authoritative metadata provider. A failure here fails the lookup.
#[async_trait]
pub trait PrimaryMetadata: Send + Sync {
    /// Exact-title lookup returning the provider's flat record, including
    /// the cross-reference identifier under `imdbID`.
    async fn movie_detail(&self, title: &str) -> ProviderOutcome<Map<String, Value>>;
}

/// Enrichment-only metadata provider. Failures are absorbed by callers.
#[async_trait]
pub trait SecondaryMetadata: Send + Sync {
    /// Resolve the primary provider's identifier to this provider's
    /// internal id. Empty result set is a well-formed `NotFound`.
    async fn find_by_external_id(&self, imdb_id: &str) -> ProviderOutcome<u64>;

    async fn movie_details_by_id(&self, movie_id: u64) -> ProviderOutcome<Map<String, Value>>;

    /// Typeahead search, at most 8 entries.
    async fn search_suggestions(&self, query: &str) -> ProviderOutcome<Vec<MovieSummary>>;

    /// Trending this week, at most 10 entries.
    async fn trending(&self) -> ProviderOutcome<Vec<MovieSummary>>;

    /// Popularity-sorted discovery for one genre, at most 10 entries.
    async fn discover_by_genre(&self, genre_id: u32) -> ProviderOutcome<Vec<MovieSummary>>;

    /// Similar titles for a movie already resolved to an internal id.
    async fn recommendations(&self, movie_id: u64) -> ProviderOutcome<Vec<MovieSummary>>;
}

#[async_trait]
pub trait StreamingAvailability: Send + Sync {
    /// Raw offer list for a title, keyed by the primary provider's id.
    async fn title_sources(&self, imdb_id: &str) -> ProviderOutcome<Vec<RawOffer>>;
}

#[async_trait]
pub trait TrailerSearch: Send + Sync {
    /// Best-effort search for an official trailer; at most one result.
    async fn find_trailer(&self, title: &str, year: &str) -> ProviderOutcome<Option<String>>;
}
