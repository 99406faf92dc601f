use async_trait::async_trait;
use movie_meta_models::RawOffer;
use reqwest::Client;

use crate::outcome::ProviderOutcome;
use crate::traits::StreamingAvailability;
use crate::watchmode::api;

/// Gateway to the streaming-availability provider (Watchmode).
#[derive(Clone)]
pub struct WatchmodeClient {
    client: Client,
    api_key: String,
}

impl WatchmodeClient {
    pub fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

#[async_trait]
impl StreamingAvailability for WatchmodeClient {
    async fn title_sources(&self, imdb_id: &str) -> ProviderOutcome<Vec<RawOffer>> {
        api::title_sources(&self.client, &self.api_key, imdb_id).await
    }
}
