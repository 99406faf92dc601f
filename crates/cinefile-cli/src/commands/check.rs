use color_eyre::Result;
use comfy_table::{Cell, Table};
use movie_meta_providers::{build_providers, ProviderOutcome};
use serde_json::json;

use crate::output::Output;

use super::{load_config, to_eyre};

/// Known-good probe targets: Inception for the title providers, the
/// Breaking Bad identifier for streaming availability.
const PROBE_TITLE: &str = "Inception";
const PROBE_YEAR: &str = "2010";
const PROBE_IMDB_ID: &str = "tt0903747";
const PROBE_TMDB_ID: u64 = 550;

enum KeyStatus {
    Valid,
    Invalid,
    Error(String),
    NotConfigured,
}

impl KeyStatus {
    fn label(&self) -> String {
        match self {
            KeyStatus::Valid => "VALID".to_string(),
            KeyStatus::Invalid => "INVALID".to_string(),
            KeyStatus::Error(detail) => format!("ERROR ({})", detail),
            KeyStatus::NotConfigured => "not configured".to_string(),
        }
    }
}

fn classify<T>(outcome: ProviderOutcome<T>) -> KeyStatus {
    match outcome {
        ProviderOutcome::Success(_) => KeyStatus::Valid,
        ProviderOutcome::NotFound => KeyStatus::Invalid,
        ProviderOutcome::Timeout => KeyStatus::Error("timed out".to_string()),
        ProviderOutcome::NetworkError(detail) => KeyStatus::Error(detail),
    }
}

pub async fn run_check(output: &Output) -> Result<()> {
    let config = load_config().map_err(to_eyre)?;
    let providers = build_providers(&config).map_err(to_eyre)?;

    let omdb = match &providers.primary {
        Some(primary) => classify(primary.movie_detail(PROBE_TITLE).await),
        None => KeyStatus::NotConfigured,
    };

    let tmdb = match &providers.secondary {
        Some(secondary) => classify(secondary.movie_details_by_id(PROBE_TMDB_ID).await),
        None => KeyStatus::NotConfigured,
    };

    let watchmode = match &providers.streaming {
        Some(streaming) => classify(streaming.title_sources(PROBE_IMDB_ID).await),
        None => KeyStatus::NotConfigured,
    };

    // A bad key still yields a well-formed empty search response, so an
    // empty probe result counts as invalid here.
    let youtube = match &providers.trailer {
        Some(trailer) => match trailer.find_trailer(PROBE_TITLE, PROBE_YEAR).await {
            ProviderOutcome::Success(Some(_)) => KeyStatus::Valid,
            ProviderOutcome::Success(None) | ProviderOutcome::NotFound => KeyStatus::Invalid,
            ProviderOutcome::Timeout => KeyStatus::Error("timed out".to_string()),
            ProviderOutcome::NetworkError(detail) => KeyStatus::Error(detail),
        },
        None => KeyStatus::NotConfigured,
    };

    let results = [
        ("omdb", omdb),
        ("tmdb", tmdb),
        ("watchmode", watchmode),
        ("youtube", youtube),
    ];

    if output.is_human() {
        let mut table = Table::new();
        table.load_preset(comfy_table::presets::UTF8_FULL);
        table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
        table.set_header(vec![
            Cell::new("Provider").add_attribute(comfy_table::Attribute::Bold),
            Cell::new("API Key").add_attribute(comfy_table::Attribute::Bold),
        ]);
        for (provider, status) in &results {
            let cell = match status {
                KeyStatus::Valid => Cell::new(status.label()).fg(comfy_table::Color::Green),
                KeyStatus::Invalid => Cell::new(status.label()).fg(comfy_table::Color::Red),
                KeyStatus::Error(_) => Cell::new(status.label()).fg(comfy_table::Color::Yellow),
                KeyStatus::NotConfigured => Cell::new(status.label()),
            };
            table.add_row(vec![Cell::new(*provider), cell]);
        }
        println!("{}", table);
    } else {
        let statuses: serde_json::Map<String, serde_json::Value> = results
            .iter()
            .map(|(provider, status)| (provider.to_string(), json!(status.label())))
            .collect();
        output.json(&serde_json::Value::Object(statuses));
    }

    Ok(())
}
