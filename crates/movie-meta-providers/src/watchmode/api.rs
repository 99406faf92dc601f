use std::time::Duration;

use movie_meta_models::RawOffer;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::outcome::ProviderOutcome;

const BASE_URL: &str = "https://api.watchmode.com/v1";

const SOURCES_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct TitleDetailsResponse {
    #[serde(default)]
    sources: Vec<RawOffer>,
}

/// Raw offer list for a title. The provider accepts the primary
/// provider's identifier directly in the path.
pub async fn title_sources(
    client: &Client,
    api_key: &str,
    imdb_id: &str,
) -> ProviderOutcome<Vec<RawOffer>> {
    let url = format!("{}/title/{}/details/", BASE_URL, imdb_id);
    let response = match client
        .get(&url)
        .query(&[("apiKey", api_key), ("append_to_response", "sources")])
        .timeout(SOURCES_TIMEOUT)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => return ProviderOutcome::from_transport_error(&e),
    };

    let payload: TitleDetailsResponse = match response.json().await {
        Ok(payload) => payload,
        Err(e) => return ProviderOutcome::from_transport_error(&e),
    };

    debug!("watchmode: {} raw offers for {}", payload.sources.len(), imdb_id);
    ProviderOutcome::Success(payload.sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sources_deserialize_with_wire_kind_field() {
        let payload: TitleDetailsResponse = serde_json::from_value(json!({
            "title": "Breaking Bad",
            "sources": [
                {"source_id": 203, "name": "Netflix", "type": "sub", "web_url": "https://netflix.com/x"},
                {"source_id": 349, "name": "Amazon", "type": "rent", "web_url": "https://amazon.com/x"}
            ]
        }))
        .unwrap();
        assert_eq!(payload.sources.len(), 2);
        assert_eq!(payload.sources[0].kind, "sub");
        assert_eq!(payload.sources[1].kind, "rent");
    }

    #[test]
    fn test_missing_sources_defaults_to_empty() {
        let payload: TitleDetailsResponse = serde_json::from_value(json!({"title": "x"})).unwrap();
        assert!(payload.sources.is_empty());
    }
}
