use async_trait::async_trait;
use movie_meta_models::MovieSummary;
use reqwest::Client;
use serde_json::{Map, Value};

use crate::outcome::ProviderOutcome;
use crate::tmdb::api;
use crate::traits::SecondaryMetadata;

/// Gateway to the secondary metadata provider (TMDB).
///
/// Consulted purely to enrich a primary record and to serve the listing
/// endpoints (suggestions, trending, discovery, recommendations); an
/// outage here never fails a lookup.
#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    api_key: String,
}

impl TmdbClient {
    pub fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

#[async_trait]
impl SecondaryMetadata for TmdbClient {
    async fn find_by_external_id(&self, imdb_id: &str) -> ProviderOutcome<u64> {
        api::find_by_imdb_id(&self.client, &self.api_key, imdb_id).await
    }

    async fn movie_details_by_id(&self, movie_id: u64) -> ProviderOutcome<Map<String, Value>> {
        api::movie_details(&self.client, &self.api_key, movie_id).await
    }

    async fn search_suggestions(&self, query: &str) -> ProviderOutcome<Vec<MovieSummary>> {
        api::search_movies(&self.client, &self.api_key, query).await
    }

    async fn trending(&self) -> ProviderOutcome<Vec<MovieSummary>> {
        api::trending_week(&self.client, &self.api_key).await
    }

    async fn discover_by_genre(&self, genre_id: u32) -> ProviderOutcome<Vec<MovieSummary>> {
        api::discover_by_genre(&self.client, &self.api_key, genre_id).await
    }

    async fn recommendations(&self, movie_id: u64) -> ProviderOutcome<Vec<MovieSummary>> {
        api::recommendations(&self.client, &self.api_key, movie_id).await
    }
}
