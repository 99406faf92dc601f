use std::time::Duration;

use movie_meta_models::MovieSummary;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::outcome::ProviderOutcome;

const BASE_URL: &str = "https://api.themoviedb.org/3";
const POSTER_CDN: &str = "https://image.tmdb.org/t/p/";

const DETAIL_TIMEOUT: Duration = Duration::from_secs(15);
const LISTING_TIMEOUT: Duration = Duration::from_secs(10);
const SUGGESTION_TIMEOUT: Duration = Duration::from_secs(5);

const SUGGESTION_LIMIT: usize = 8;
const LISTING_LIMIT: usize = 10;

#[derive(Debug, Deserialize)]
struct FindResponse {
    #[serde(default)]
    movie_results: Vec<FindMovie>,
}

#[derive(Debug, Deserialize)]
struct FindMovie {
    id: u64,
}

#[derive(Debug, Deserialize)]
struct ListingResponse {
    #[serde(default)]
    results: Vec<ListingMovie>,
}

#[derive(Debug, Deserialize)]
struct ListingMovie {
    id: u64,
    title: String,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    poster_path: Option<String>,
    #[serde(default)]
    vote_average: f64,
}

/// Resolve the primary provider's identifier to a TMDB movie id.
pub async fn find_by_imdb_id(client: &Client, api_key: &str, imdb_id: &str) -> ProviderOutcome<u64> {
    let url = format!("{}/find/{}", BASE_URL, imdb_id);
    let response = match client
        .get(&url)
        .query(&[("api_key", api_key), ("external_source", "imdb_id")])
        .timeout(DETAIL_TIMEOUT)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => return ProviderOutcome::from_transport_error(&e),
    };

    let payload: FindResponse = match response.json().await {
        Ok(payload) => payload,
        Err(e) => return ProviderOutcome::from_transport_error(&e),
    };

    first_movie_id(payload)
}

fn first_movie_id(payload: FindResponse) -> ProviderOutcome<u64> {
    match payload.movie_results.first() {
        Some(movie) => ProviderOutcome::Success(movie.id),
        None => ProviderOutcome::NotFound,
    }
}

/// Full detail record for a TMDB movie id, returned as the raw field map
/// so the merge step can overlay it without caring about its shape.
pub async fn movie_details(
    client: &Client,
    api_key: &str,
    movie_id: u64,
) -> ProviderOutcome<Map<String, Value>> {
    let url = format!("{}/movie/{}", BASE_URL, movie_id);
    let response = match client
        .get(&url)
        .query(&[("api_key", api_key)])
        .timeout(DETAIL_TIMEOUT)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => return ProviderOutcome::from_transport_error(&e),
    };

    match response.json().await {
        Ok(payload) => ProviderOutcome::Success(payload),
        Err(e) => ProviderOutcome::from_transport_error(&e),
    }
}

/// Typeahead suggestions for a partial query.
pub async fn search_movies(
    client: &Client,
    api_key: &str,
    query: &str,
) -> ProviderOutcome<Vec<MovieSummary>> {
    let url = format!("{}/search/movie", BASE_URL);
    let response = match client
        .get(&url)
        .query(&[("api_key", api_key), ("query", query), ("page", "1")])
        .timeout(SUGGESTION_TIMEOUT)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => return ProviderOutcome::from_transport_error(&e),
    };

    let payload: ListingResponse = match response.json().await {
        Ok(payload) => payload,
        Err(e) => return ProviderOutcome::from_transport_error(&e),
    };

    debug!("tmdb: {} search results for '{}'", payload.results.len(), query);
    ProviderOutcome::Success(to_summaries(payload.results, SUGGESTION_LIMIT, "w92", false))
}

/// Trending-this-week listing.
pub async fn trending_week(client: &Client, api_key: &str) -> ProviderOutcome<Vec<MovieSummary>> {
    let url = format!("{}/trending/movie/week", BASE_URL);
    let response = match client
        .get(&url)
        .query(&[("api_key", api_key)])
        .timeout(LISTING_TIMEOUT)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => return ProviderOutcome::from_transport_error(&e),
    };

    let payload: ListingResponse = match response.json().await {
        Ok(payload) => payload,
        Err(e) => return ProviderOutcome::from_transport_error(&e),
    };

    ProviderOutcome::Success(to_summaries(payload.results, LISTING_LIMIT, "w92", true))
}

/// Popularity-sorted discovery for one genre.
pub async fn discover_by_genre(
    client: &Client,
    api_key: &str,
    genre_id: u32,
) -> ProviderOutcome<Vec<MovieSummary>> {
    let url = format!("{}/discover/movie", BASE_URL);
    let genre = genre_id.to_string();
    let response = match client
        .get(&url)
        .query(&[
            ("api_key", api_key),
            ("with_genres", genre.as_str()),
            ("sort_by", "popularity.desc"),
        ])
        .timeout(LISTING_TIMEOUT)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => return ProviderOutcome::from_transport_error(&e),
    };

    let payload: ListingResponse = match response.json().await {
        Ok(payload) => payload,
        Err(e) => return ProviderOutcome::from_transport_error(&e),
    };

    ProviderOutcome::Success(to_summaries(payload.results, LISTING_LIMIT, "w92", false))
}

/// Similar-title recommendations for an already-resolved movie id.
pub async fn recommendations(
    client: &Client,
    api_key: &str,
    movie_id: u64,
) -> ProviderOutcome<Vec<MovieSummary>> {
    let url = format!("{}/movie/{}/recommendations", BASE_URL, movie_id);
    let response = match client
        .get(&url)
        .query(&[("api_key", api_key)])
        .timeout(LISTING_TIMEOUT)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => return ProviderOutcome::from_transport_error(&e),
    };

    let payload: ListingResponse = match response.json().await {
        Ok(payload) => payload,
        Err(e) => return ProviderOutcome::from_transport_error(&e),
    };

    ProviderOutcome::Success(to_summaries(payload.results, usize::MAX, "w300", false))
}

/// Map wire listing entries to summaries.
///
/// Year is the first four characters of the release date, "N/A" when the
/// provider omitted it. `round_rating` rounds to one decimal, matching the
/// trending display convention.
fn to_summaries(
    movies: Vec<ListingMovie>,
    limit: usize,
    poster_size: &str,
    round_rating: bool,
) -> Vec<MovieSummary> {
    movies
        .into_iter()
        .take(limit)
        .map(|movie| {
            let year = movie
                .release_date
                .as_deref()
                .filter(|d| d.len() >= 4)
                .map(|d| d[..4].to_string())
                .unwrap_or_else(|| "N/A".to_string());
            let poster = movie
                .poster_path
                .map(|path| format!("{}{}{}", POSTER_CDN, poster_size, path));
            let rating = if round_rating {
                (movie.vote_average * 10.0).round() / 10.0
            } else {
                movie.vote_average
            };
            MovieSummary {
                id: movie.id,
                title: movie.title,
                year,
                poster,
                rating,
            }
        })
        .collect()
}
