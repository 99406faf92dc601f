use async_trait::async_trait;
use reqwest::Client;

use crate::outcome::ProviderOutcome;
use crate::traits::TrailerSearch;
use crate::youtube::api;

/// Gateway to the trailer-search provider (YouTube Data API v3).
#[derive(Clone)]
pub struct YoutubeClient {
    client: Client,
    api_key: String,
}

impl YoutubeClient {
    pub fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

#[async_trait]
impl TrailerSearch for YoutubeClient {
    async fn find_trailer(&self, title: &str, year: &str) -> ProviderOutcome<Option<String>> {
        api::search_trailer(&self.client, &self.api_key, title, year).await
    }
}
