use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::outcome::ProviderOutcome;

const BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
const WATCH_URL: &str = "https://youtube.com/watch?v=";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: VideoId,
}

#[derive(Debug, Deserialize)]
struct VideoId {
    #[serde(rename = "videoId", default)]
    video_id: Option<String>,
}

/// Search for the official trailer. Best-effort: no request deadline is
/// set, and callers treat every failure as "no trailer".
pub async fn search_trailer(
    client: &Client,
    api_key: &str,
    title: &str,
    year: &str,
) -> ProviderOutcome<Option<String>> {
    let query = format!("{} {} Official Trailer", title, year);
    let url = format!("{}/search", BASE_URL);
    let response = match client
        .get(&url)
        .query(&[
            ("q", query.as_str()),
            ("part", "snippet"),
            ("type", "video"),
            ("maxResults", "1"),
            ("key", api_key),
        ])
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => return ProviderOutcome::from_transport_error(&e),
    };

    let payload: SearchResponse = match response.json().await {
        Ok(payload) => payload,
        Err(e) => return ProviderOutcome::from_transport_error(&e),
    };

    let trailer = first_watch_url(payload);
    debug!("youtube: trailer for '{}': {:?}", query, trailer);
    ProviderOutcome::Success(trailer)
}

fn first_watch_url(payload: SearchResponse) -> Option<String> {
    payload
        .items
        .into_iter()
        .next()
        .and_then(|item| item.id.video_id)
        .map(|id| format!("{}{}", WATCH_URL, id))
}
