use std::time::Duration;

use reqwest::Client;
use serde_json::{Map, Value};
use tracing::debug;

use crate::outcome::ProviderOutcome;

const BASE_URL: &str = "https://www.omdbapi.com/";

/// Metadata detail lookups get the longest deadline.
const DETAIL_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetch the flat record for an exact title, full plot included.
pub async fn fetch_movie_detail(
    client: &Client,
    api_key: &str,
    title: &str,
) -> ProviderOutcome<Map<String, Value>> {
    let response = match client
        .get(BASE_URL)
        .query(&[("t", title), ("plot", "full"), ("apikey", api_key)])
        .timeout(DETAIL_TIMEOUT)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => return ProviderOutcome::from_transport_error(&e),
    };

    let payload: Map<String, Value> = match response.json().await {
        Ok(payload) => payload,
        Err(e) => return ProviderOutcome::from_transport_error(&e),
    };

    debug!("omdb: fetched detail for '{}'", title);
    interpret_detail_payload(payload)
}

/// The provider signals "no match" in-band with `Response: "False"`.
pub(crate) fn interpret_detail_payload(payload: Map<String, Value>) -> ProviderOutcome<Map<String, Value>> {
    match payload.get("Response").and_then(Value::as_str) {
        Some("False") => ProviderOutcome::NotFound,
        _ => ProviderOutcome::Success(payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_no_match_marker_maps_to_not_found() {
        let payload = as_map(json!({"Response": "False", "Error": "Movie not found!"}));
        assert_eq!(interpret_detail_payload(payload), ProviderOutcome::NotFound);
    }

    #[test]
    fn test_match_passes_payload_through() {
        let payload = as_map(json!({
            "Title": "Inception",
            "Year": "2010",
            "imdbID": "tt1375666",
            "Response": "True"
        }));
        match interpret_detail_payload(payload) {
            ProviderOutcome::Success(map) => {
                assert_eq!(map.get("Title").and_then(Value::as_str), Some("Inception"));
                assert_eq!(map.get("imdbID").and_then(Value::as_str), Some("tt1375666"));
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_response_field_is_treated_as_match() {
        let payload = as_map(json!({"Title": "Arrival"}));
        assert!(interpret_detail_payload(payload).is_success());
    }
}
