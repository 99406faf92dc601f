use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use movie_meta_models::{MovieRecord, MovieSummary, StreamingOffer};
use movie_meta_providers::{
    PrimaryMetadata, ProviderOutcome, ProviderSet, SecondaryMetadata, StreamingAvailability,
    TrailerSearch,
};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::cache::TtlCache;
use crate::dedupe::dedupe_offers;
use crate::error::LookupError;
use crate::merge::{merge_record, SecondaryPayload};

/// Cache operation kinds; each pairs with its own freshness window.
mod op {
    pub const MOVIE_DETAIL: &str = "movie-detail";
    pub const FIND_BY_EXTERNAL_ID: &str = "find-by-external-id";
    pub const MOVIE_DETAILS_BY_ID: &str = "movie-details-by-id";
    pub const SUGGESTIONS: &str = "suggestions";
    pub const TRENDING: &str = "trending";
    pub const GENRE_DISCOVERY: &str = "genre-discovery";
    pub const RECOMMENDATIONS: &str = "recommendations";
    pub const STREAMING_SOURCES: &str = "streaming-sources";
    pub const TRAILER: &str = "trailer";
}

/// Per-operation freshness windows. Trailer results are cached for the
/// remaining process lifetime.
mod ttl {
    use std::time::Duration;

    pub const MOVIE_DETAIL: Option<Duration> = Some(Duration::from_secs(3600));
    pub const FIND_BY_EXTERNAL_ID: Option<Duration> = Some(Duration::from_secs(3600));
    pub const MOVIE_DETAILS_BY_ID: Option<Duration> = Some(Duration::from_secs(3600));
    pub const SUGGESTIONS: Option<Duration> = Some(Duration::from_secs(300));
    pub const TRENDING: Option<Duration> = Some(Duration::from_secs(3600));
    pub const GENRE_DISCOVERY: Option<Duration> = Some(Duration::from_secs(3600));
    pub const RECOMMENDATIONS: Option<Duration> = Some(Duration::from_secs(3600));
    pub const STREAMING_SOURCES: Option<Duration> = Some(Duration::from_secs(86400));
    pub const TRAILER: Option<Duration> = None;
}

/// Queries shorter than this never reach the suggestion provider.
const MIN_SUGGESTION_QUERY: usize = 2;

/// The aggregation entry point: drives the gateways, merger, and cache
/// to turn a title into a consolidated record, and serves the enrichment
/// surface (suggestions, trending, discovery, similar titles, streaming
/// offers, trailer).
///
/// Only the primary provider can fail a lookup. Every secondary,
/// streaming, trailer, or suggestion failure is absorbed here and
/// surfaced as an empty result so an unrelated provider's outage never
/// degrades the core fields.
pub struct LookupOrchestrator {
    cache: TtlCache,
    primary: Arc<dyn PrimaryMetadata>,
    secondary: Option<Arc<dyn SecondaryMetadata>>,
    streaming: Option<Arc<dyn StreamingAvailability>>,
    trailer: Option<Arc<dyn TrailerSearch>>,
}

impl LookupOrchestrator {
    pub fn new(primary: Arc<dyn PrimaryMetadata>) -> Self {
        Self {
            cache: TtlCache::new(),
            primary,
            secondary: None,
            streaming: None,
            trailer: None,
        }
    }

    pub fn with_secondary(mut self, secondary: Arc<dyn SecondaryMetadata>) -> Self {
        self.secondary = Some(secondary);
        self
    }

    pub fn with_streaming(mut self, streaming: Arc<dyn StreamingAvailability>) -> Self {
        self.streaming = Some(streaming);
        self
    }

    pub fn with_trailer(mut self, trailer: Arc<dyn TrailerSearch>) -> Self {
        self.trailer = Some(trailer);
        self
    }

    /// Assemble from a configured provider set. The primary provider is
    /// the only hard requirement.
    pub fn from_providers(providers: ProviderSet) -> Result<Self> {
        let primary = providers
            .primary
            .ok_or_else(|| anyhow::anyhow!("Primary metadata provider (omdb) is not configured"))?;

        let mut orchestrator = Self::new(primary);
        if let Some(secondary) = providers.secondary {
            orchestrator = orchestrator.with_secondary(secondary);
        }
        if let Some(streaming) = providers.streaming {
            orchestrator = orchestrator.with_streaming(streaming);
        }
        if let Some(trailer) = providers.trailer {
            orchestrator = orchestrator.with_trailer(trailer);
        }
        Ok(orchestrator)
    }

    /// Look up a title and return the consolidated record.
    ///
    /// The primary call decides the outcome; the secondary provider is
    /// then consulted best-effort through the cross-reference identifier
    /// and merged in, with the primary's values winning collisions.
    pub async fn lookup_movie(&self, title: &str) -> Result<MovieRecord, LookupError> {
        let primary = Arc::clone(&self.primary);
        let lookup_title = title.to_string();
        let outcome: ProviderOutcome<Map<String, Value>> = self
            .cache
            .get_or_compute(op::MOVIE_DETAIL, title, ttl::MOVIE_DETAIL, move || async move {
                primary.movie_detail(&lookup_title).await
            })
            .await;

        let primary_payload = match outcome {
            ProviderOutcome::Success(payload) => payload,
            ProviderOutcome::NotFound => return Err(LookupError::NotFound(title.to_string())),
            ProviderOutcome::Timeout => return Err(LookupError::Timeout),
            ProviderOutcome::NetworkError(detail) => return Err(LookupError::Network(detail)),
        };

        let secondary = self.fetch_secondary(&primary_payload).await;

        merge_record(primary_payload, secondary)
            .map_err(|e| LookupError::Network(format!("Malformed provider payload: {}", e)))
    }

    /// Best-effort secondary enrichment: resolve the cross-reference
    /// identifier, then fetch full details. Any failure at either step
    /// yields `None` and never fails the lookup.
    async fn fetch_secondary(&self, primary_payload: &Map<String, Value>) -> Option<SecondaryPayload> {
        let secondary = self.secondary.as_ref()?;
        let imdb_id = primary_payload
            .get("imdbID")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())?;

        let find_client = Arc::clone(secondary);
        let find_id = imdb_id.to_string();
        let found: ProviderOutcome<u64> = self
            .cache
            .get_or_compute(
                op::FIND_BY_EXTERNAL_ID,
                imdb_id,
                ttl::FIND_BY_EXTERNAL_ID,
                move || async move { find_client.find_by_external_id(&find_id).await },
            )
            .await;

        let movie_id = match found {
            ProviderOutcome::Success(id) => id,
            other => {
                debug!("secondary resolve for {} skipped: {:?}", imdb_id, other);
                return None;
            }
        };

        let details_client = Arc::clone(secondary);
        let details: ProviderOutcome<Map<String, Value>> = self
            .cache
            .get_or_compute(
                op::MOVIE_DETAILS_BY_ID,
                &movie_id.to_string(),
                ttl::MOVIE_DETAILS_BY_ID,
                move || async move { details_client.movie_details_by_id(movie_id).await },
            )
            .await;

        match details {
            ProviderOutcome::Success(fields) => Some(SecondaryPayload { movie_id, fields }),
            other => {
                debug!("secondary details for {} skipped: {:?}", movie_id, other);
                None
            }
        }
    }

    /// Typeahead suggestions; empty for queries under two characters.
    pub async fn suggestions(&self, query: &str) -> Vec<MovieSummary> {
        let query = query.trim();
        if query.chars().count() < MIN_SUGGESTION_QUERY {
            return Vec::new();
        }
        let Some(secondary) = &self.secondary else {
            return Vec::new();
        };

        let client = Arc::clone(secondary);
        let search_query = query.to_string();
        let outcome = self
            .cache
            .get_or_compute(op::SUGGESTIONS, query, ttl::SUGGESTIONS, move || async move {
                client.search_suggestions(&search_query).await
            })
            .await;
        absorb(outcome, "suggestions")
    }

    pub async fn trending(&self) -> Vec<MovieSummary> {
        let Some(secondary) = &self.secondary else {
            return Vec::new();
        };

        let client = Arc::clone(secondary);
        let outcome = self
            .cache
            .get_or_compute(op::TRENDING, "week", ttl::TRENDING, move || async move {
                client.trending().await
            })
            .await;
        absorb(outcome, "trending")
    }

    pub async fn movies_by_genre(&self, genre_id: u32) -> Vec<MovieSummary> {
        let Some(secondary) = &self.secondary else {
            return Vec::new();
        };

        let client = Arc::clone(secondary);
        let outcome = self
            .cache
            .get_or_compute(
                op::GENRE_DISCOVERY,
                &genre_id.to_string(),
                ttl::GENRE_DISCOVERY,
                move || async move { client.discover_by_genre(genre_id).await },
            )
            .await;
        absorb(outcome, "genre discovery")
    }

    /// Similar titles; empty unless the record resolved a secondary id.
    pub async fn similar(&self, record: &MovieRecord) -> Vec<MovieSummary> {
        let Some(secondary) = &self.secondary else {
            return Vec::new();
        };
        let Some(movie_id) = record.tmdb_id else {
            return Vec::new();
        };

        let client = Arc::clone(secondary);
        let outcome = self
            .cache
            .get_or_compute(
                op::RECOMMENDATIONS,
                &movie_id.to_string(),
                ttl::RECOMMENDATIONS,
                move || async move { client.recommendations(movie_id).await },
            )
            .await;
        absorb(outcome, "recommendations")
    }

    /// Deduplicated subscription offers; empty without a cross-reference
    /// identifier or streaming provider.
    pub async fn streaming_offers(&self, record: &MovieRecord) -> Vec<StreamingOffer> {
        let Some(streaming) = &self.streaming else {
            return Vec::new();
        };
        let Some(imdb_id) = record.imdb_id.as_deref().filter(|id| !id.is_empty()) else {
            return Vec::new();
        };

        let client = Arc::clone(streaming);
        let lookup_id = imdb_id.to_string();
        let outcome = self
            .cache
            .get_or_compute(
                op::STREAMING_SOURCES,
                imdb_id,
                ttl::STREAMING_SOURCES,
                move || async move { client.title_sources(&lookup_id).await },
            )
            .await;
        dedupe_offers(absorb(outcome, "streaming availability"))
    }

    /// Official trailer URL, best-effort.
    pub async fn trailer_url(&self, record: &MovieRecord) -> Option<String> {
        let trailer = self.trailer.as_ref()?;

        let client = Arc::clone(trailer);
        let title = record.title.clone();
        let year = record.display_year().to_string();
        let args = format!("{} {}", record.title, year);
        let outcome = self
            .cache
            .get_or_compute(op::TRAILER, &args, ttl::TRAILER, move || async move {
                client.find_trailer(&title, &year).await
            })
            .await;

        match outcome {
            ProviderOutcome::Success(url) => url,
            other => {
                warn!("trailer lookup for '{}' failed: {:?}", record.title, other);
                None
            }
        }
    }
}

/// Enrichment failures become empty results, never errors.
fn absorb<T>(outcome: ProviderOutcome<Vec<T>>, what: &str) -> Vec<T> {
    match outcome {
        ProviderOutcome::Success(items) => items,
        ProviderOutcome::NotFound => {
            debug!("{}: provider returned no match", what);
            Vec::new()
        }
        ProviderOutcome::Timeout => {
            warn!("{}: provider call timed out", what);
            Vec::new()
        }
        ProviderOutcome::NetworkError(detail) => {
            warn!("{}: {}", what, detail);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use movie_meta_models::RawOffer;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn inception_payload() -> Map<String, Value> {
        as_map(json!({
            "Title": "Inception",
            "Year": "2010",
            "Plot": "A thief who steals corporate secrets...",
            "imdbRating": "8.8",
            "imdbID": "tt1375666",
            "Response": "True"
        }))
    }

    struct FakePrimary {
        outcome: ProviderOutcome<Map<String, Value>>,
        calls: AtomicUsize,
    }

    impl FakePrimary {
        fn new(outcome: ProviderOutcome<Map<String, Value>>) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl PrimaryMetadata for FakePrimary {
        async fn movie_detail(&self, _title: &str) -> ProviderOutcome<Map<String, Value>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    struct FakeSecondary {
        find: ProviderOutcome<u64>,
        details: ProviderOutcome<Map<String, Value>>,
        recommendations: ProviderOutcome<Vec<MovieSummary>>,
        suggestions: ProviderOutcome<Vec<MovieSummary>>,
        find_calls: AtomicUsize,
        details_calls: AtomicUsize,
        suggestion_calls: AtomicUsize,
    }

    impl FakeSecondary {
        fn new(find: ProviderOutcome<u64>, details: ProviderOutcome<Map<String, Value>>) -> Arc<Self> {
            Arc::new(Self {
                find,
                details,
                recommendations: ProviderOutcome::Success(Vec::new()),
                suggestions: ProviderOutcome::Success(Vec::new()),
                find_calls: AtomicUsize::new(0),
                details_calls: AtomicUsize::new(0),
                suggestion_calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl SecondaryMetadata for FakeSecondary {
        async fn find_by_external_id(&self, _imdb_id: &str) -> ProviderOutcome<u64> {
            self.find_calls.fetch_add(1, Ordering::SeqCst);
            self.find.clone()
        }

        async fn movie_details_by_id(&self, _movie_id: u64) -> ProviderOutcome<Map<String, Value>> {
            self.details_calls.fetch_add(1, Ordering::SeqCst);
            self.details.clone()
        }

        async fn search_suggestions(&self, _query: &str) -> ProviderOutcome<Vec<MovieSummary>> {
            self.suggestion_calls.fetch_add(1, Ordering::SeqCst);
            self.suggestions.clone()
        }

        async fn trending(&self) -> ProviderOutcome<Vec<MovieSummary>> {
            ProviderOutcome::Success(Vec::new())
        }

        async fn discover_by_genre(&self, _genre_id: u32) -> ProviderOutcome<Vec<MovieSummary>> {
            ProviderOutcome::Success(Vec::new())
        }

        async fn recommendations(&self, _movie_id: u64) -> ProviderOutcome<Vec<MovieSummary>> {
            self.recommendations.clone()
        }
    }

    struct FakeStreaming {
        outcome: ProviderOutcome<Vec<RawOffer>>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl StreamingAvailability for FakeStreaming {
        async fn title_sources(&self, _imdb_id: &str) -> ProviderOutcome<Vec<RawOffer>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    struct FakeTrailer {
        outcome: ProviderOutcome<Option<String>>,
    }

    #[async_trait]
    impl TrailerSearch for FakeTrailer {
        async fn find_trailer(&self, _title: &str, _year: &str) -> ProviderOutcome<Option<String>> {
            self.outcome.clone()
        }
    }

    #[tokio::test]
    async fn test_primary_not_found_fails_without_secondary_call() {
        let primary = FakePrimary::new(ProviderOutcome::NotFound);
        let secondary = FakeSecondary::new(
            ProviderOutcome::Success(27205),
            ProviderOutcome::Success(Map::new()),
        );
        let orchestrator = LookupOrchestrator::new(primary.clone())
            .with_secondary(secondary.clone());

        let result = orchestrator.lookup_movie("Nonexistent").await;

        assert_eq!(result, Err(LookupError::NotFound("Nonexistent".to_string())));
        assert_eq!(secondary.find_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_primary_timeout_and_network_errors_are_distinguishable() {
        let timeout = LookupOrchestrator::new(FakePrimary::new(ProviderOutcome::Timeout));
        assert_eq!(timeout.lookup_movie("X").await, Err(LookupError::Timeout));

        let network = LookupOrchestrator::new(FakePrimary::new(ProviderOutcome::NetworkError(
            "connection refused".to_string(),
        )));
        assert_eq!(
            network.lookup_movie("X").await,
            Err(LookupError::Network("connection refused".to_string()))
        );
    }

    #[tokio::test]
    async fn test_secondary_resolve_failure_falls_back_to_primary_only() {
        let primary = FakePrimary::new(ProviderOutcome::Success(inception_payload()));
        let secondary = FakeSecondary::new(
            ProviderOutcome::NetworkError("tmdb down".to_string()),
            ProviderOutcome::Success(Map::new()),
        );
        let orchestrator = LookupOrchestrator::new(primary).with_secondary(secondary.clone());

        let record = orchestrator.lookup_movie("Inception").await.unwrap();

        assert_eq!(record.title, "Inception");
        assert_eq!(record.tmdb_id, None);
        assert_eq!(secondary.details_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_secondary_details_failure_also_falls_back() {
        let primary = FakePrimary::new(ProviderOutcome::Success(inception_payload()));
        let secondary = FakeSecondary::new(ProviderOutcome::Success(27205), ProviderOutcome::Timeout);
        let orchestrator = LookupOrchestrator::new(primary).with_secondary(secondary);

        let record = orchestrator.lookup_movie("Inception").await.unwrap();

        assert_eq!(record.tmdb_id, None);
        assert_eq!(record.imdb_rating.as_deref(), Some("8.8"));
    }

    #[tokio::test]
    async fn test_end_to_end_merge_with_primary_precedence() {
        let primary = FakePrimary::new(ProviderOutcome::Success(inception_payload()));
        let secondary = FakeSecondary::new(
            ProviderOutcome::Success(27205),
            ProviderOutcome::Success(as_map(json!({
                "Title": "Inception (international)",
                "tagline": "Your mind is the scene of the crime.",
                "budget": 160000000
            }))),
        );
        let orchestrator = LookupOrchestrator::new(primary).with_secondary(secondary);

        let record = orchestrator.lookup_movie("Inception").await.unwrap();

        // Primary wins the collision; secondary-only fields carry through.
        assert_eq!(record.title, "Inception");
        assert_eq!(record.plot.as_deref(), Some("A thief who steals corporate secrets..."));
        assert_eq!(record.extra_str("tagline"), Some("Your mind is the scene of the crime."));
        assert_eq!(record.tmdb_id, Some(27205));
    }

    #[tokio::test]
    async fn test_repeated_lookup_hits_the_cache() {
        let primary = FakePrimary::new(ProviderOutcome::Success(inception_payload()));
        let secondary = FakeSecondary::new(
            ProviderOutcome::Success(27205),
            ProviderOutcome::Success(Map::new()),
        );
        let orchestrator =
            LookupOrchestrator::new(primary.clone()).with_secondary(secondary.clone());

        orchestrator.lookup_movie("Inception").await.unwrap();
        orchestrator.lookup_movie("  INCEPTION ").await.unwrap();

        assert_eq!(primary.calls.load(Ordering::SeqCst), 1);
        assert_eq!(secondary.find_calls.load(Ordering::SeqCst), 1);
        assert_eq!(secondary.details_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_cross_reference_skips_secondary() {
        let payload = as_map(json!({"Title": "Obscure Short", "Response": "True"}));
        let primary = FakePrimary::new(ProviderOutcome::Success(payload));
        let secondary = FakeSecondary::new(
            ProviderOutcome::Success(1),
            ProviderOutcome::Success(Map::new()),
        );
        let orchestrator = LookupOrchestrator::new(primary).with_secondary(secondary.clone());

        let record = orchestrator.lookup_movie("Obscure Short").await.unwrap();

        assert_eq!(record.tmdb_id, None);
        assert_eq!(secondary.find_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_short_suggestion_query_never_calls_provider() {
        let primary = FakePrimary::new(ProviderOutcome::NotFound);
        let secondary = FakeSecondary::new(
            ProviderOutcome::NotFound,
            ProviderOutcome::NotFound,
        );
        let orchestrator = LookupOrchestrator::new(primary).with_secondary(secondary.clone());

        assert!(orchestrator.suggestions("a").await.is_empty());
        assert!(orchestrator.suggestions("  ").await.is_empty());
        assert_eq!(secondary.suggestion_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_enrichments_without_secondary_are_empty() {
        let orchestrator =
            LookupOrchestrator::new(FakePrimary::new(ProviderOutcome::NotFound));

        assert!(orchestrator.suggestions("incep").await.is_empty());
        assert!(orchestrator.trending().await.is_empty());
        assert!(orchestrator.movies_by_genre(28).await.is_empty());
    }

    #[tokio::test]
    async fn test_streaming_offers_are_deduplicated() {
        let offers = vec![
            RawOffer {
                source_id: 203,
                name: "Netflix".to_string(),
                kind: "sub".to_string(),
                web_url: "https://netflix.com/a".to_string(),
            },
            RawOffer {
                source_id: 203,
                name: "Netflix".to_string(),
                kind: "sub".to_string(),
                web_url: "https://netflix.com/b".to_string(),
            },
            RawOffer {
                source_id: 349,
                name: "Amazon".to_string(),
                kind: "rent".to_string(),
                web_url: "https://amazon.com/a".to_string(),
            },
            RawOffer {
                source_id: 157,
                name: "Hulu".to_string(),
                kind: "sub".to_string(),
                web_url: "https://hulu.com/a".to_string(),
            },
        ];
        let streaming = Arc::new(FakeStreaming {
            outcome: ProviderOutcome::Success(offers),
            calls: AtomicUsize::new(0),
        });
        let orchestrator = LookupOrchestrator::new(FakePrimary::new(ProviderOutcome::NotFound))
            .with_streaming(streaming.clone());

        let record: MovieRecord =
            serde_json::from_value(json!({"Title": "Inception", "imdbID": "tt1375666"})).unwrap();
        let offers = orchestrator.streaming_offers(&record).await;

        assert_eq!(offers.len(), 2);
        assert_eq!(offers[0].name, "Netflix");
        assert_eq!(offers[1].name, "Hulu");
    }

    #[tokio::test]
    async fn test_streaming_without_cross_reference_is_empty_and_silent() {
        let streaming = Arc::new(FakeStreaming {
            outcome: ProviderOutcome::Success(Vec::new()),
            calls: AtomicUsize::new(0),
        });
        let orchestrator = LookupOrchestrator::new(FakePrimary::new(ProviderOutcome::NotFound))
            .with_streaming(streaming.clone());

        let record: MovieRecord = serde_json::from_value(json!({"Title": "No Id"})).unwrap();

        assert!(orchestrator.streaming_offers(&record).await.is_empty());
        assert_eq!(streaming.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_similar_requires_secondary_identifier() {
        let secondary = FakeSecondary::new(
            ProviderOutcome::NotFound,
            ProviderOutcome::NotFound,
        );
        let orchestrator = LookupOrchestrator::new(FakePrimary::new(ProviderOutcome::NotFound))
            .with_secondary(secondary);

        let record: MovieRecord = serde_json::from_value(json!({"Title": "No Id"})).unwrap();
        assert!(orchestrator.similar(&record).await.is_empty());
    }

    #[tokio::test]
    async fn test_trailer_failure_is_absorbed_to_none() {
        let trailer = Arc::new(FakeTrailer {
            outcome: ProviderOutcome::NetworkError("quota exceeded".to_string()),
        });
        let orchestrator = LookupOrchestrator::new(FakePrimary::new(ProviderOutcome::NotFound))
            .with_trailer(trailer);

        let record: MovieRecord =
            serde_json::from_value(json!({"Title": "Inception", "Year": "2010"})).unwrap();
        assert_eq!(orchestrator.trailer_url(&record).await, None);
    }

    #[tokio::test]
    async fn test_trailer_success_returns_watch_url() {
        let trailer = Arc::new(FakeTrailer {
            outcome: ProviderOutcome::Success(Some(
                "https://youtube.com/watch?v=8hP9D6kZseM".to_string(),
            )),
        });
        let orchestrator = LookupOrchestrator::new(FakePrimary::new(ProviderOutcome::NotFound))
            .with_trailer(trailer);

        let record: MovieRecord =
            serde_json::from_value(json!({"Title": "Inception", "Year": "2010"})).unwrap();
        assert_eq!(
            orchestrator.trailer_url(&record).await.as_deref(),
            Some("https://youtube.com/watch?v=8hP9D6kZseM")
        );
    }
}
