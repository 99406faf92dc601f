use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};

use crate::omdb::api;
use crate::outcome::ProviderOutcome;
use crate::traits::PrimaryMetadata;

/// Gateway to the primary metadata provider (OMDb).
#[derive(Clone)]
pub struct OmdbClient {
    client: Client,
    api_key: String,
}

impl OmdbClient {
    pub fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

#[async_trait]
impl PrimaryMetadata for OmdbClient {
    async fn movie_detail(&self, title: &str) -> ProviderOutcome<Map<String, Value>> {
        api::fetch_movie_detail(&self.client, &self.api_key, title).await
    }
}
