use std::sync::Arc;

use anyhow::Result;
use movie_meta_config::Config;
use reqwest::Client;
use tracing::info;

use crate::omdb::OmdbClient;
use crate::tmdb::TmdbClient;
use crate::traits::{PrimaryMetadata, SecondaryMetadata, StreamingAvailability, TrailerSearch};
use crate::watchmode::WatchmodeClient;
use crate::youtube::YoutubeClient;

const USER_AGENT: &str = concat!("cinefile/", env!("CARGO_PKG_VERSION"));

/// The gateways built from configuration. A provider that is disabled or
/// missing an API key stays `None`; the orchestrator degrades per its
/// role (primary: lookups fail; others: empty enrichments).
pub struct ProviderSet {
    pub primary: Option<Arc<dyn PrimaryMetadata>>,
    pub secondary: Option<Arc<dyn SecondaryMetadata>>,
    pub streaming: Option<Arc<dyn StreamingAvailability>>,
    pub trailer: Option<Arc<dyn TrailerSearch>>,
}

/// Build all configured gateways over one shared HTTP client.
pub fn build_providers(config: &Config) -> Result<ProviderSet> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;

    let primary = config.omdb.active_key().map(|key| {
        Arc::new(OmdbClient::new(client.clone(), key.to_string())) as Arc<dyn PrimaryMetadata>
    });
    let secondary = config.tmdb.active_key().map(|key| {
        Arc::new(TmdbClient::new(client.clone(), key.to_string())) as Arc<dyn SecondaryMetadata>
    });
    let streaming = config.watchmode.active_key().map(|key| {
        Arc::new(WatchmodeClient::new(client.clone(), key.to_string()))
            as Arc<dyn StreamingAvailability>
    });
    let trailer = config.youtube.active_key().map(|key| {
        Arc::new(YoutubeClient::new(client.clone(), key.to_string())) as Arc<dyn TrailerSearch>
    });

    info!(
        "providers configured: omdb={} tmdb={} watchmode={} youtube={}",
        primary.is_some(),
        secondary.is_some(),
        streaming.is_some(),
        trailer.is_some()
    );

    Ok(ProviderSet {
        primary,
        secondary,
        streaming,
        trailer,
    })
}
