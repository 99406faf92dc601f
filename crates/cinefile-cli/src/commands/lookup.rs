use color_eyre::Result;
use comfy_table::{Cell, Table};
use movie_meta_models::{MovieRecord, MovieSummary, StreamingOffer};
use owo_colors::OwoColorize;
use serde_json::json;

use crate::output::Output;

use super::{build_orchestrator, to_eyre};

pub async fn run_lookup(
    title: &str,
    streaming: bool,
    trailer: bool,
    similar: bool,
    all: bool,
    output: &Output,
) -> Result<()> {
    let orchestrator = build_orchestrator().map_err(to_eyre)?;

    let (want_streaming, want_trailer, want_similar) = if all {
        (true, true, true)
    } else {
        (streaming, trailer, similar)
    };

    let record = match orchestrator.lookup_movie(title).await {
        Ok(record) => record,
        Err(err) => {
            output.error(err.to_string());
            std::process::exit(1);
        }
    };

    render_record(&record, output);

    if want_streaming || want_trailer || want_similar {
        // Independent enrichments; fetch them concurrently.
        let (offers, trailer_url, similar_titles) = tokio::join!(
            async {
                if want_streaming {
                    orchestrator.streaming_offers(&record).await
                } else {
                    Vec::new()
                }
            },
            async {
                if want_trailer {
                    orchestrator.trailer_url(&record).await
                } else {
                    None
                }
            },
            async {
                if want_similar {
                    orchestrator.similar(&record).await
                } else {
                    Vec::new()
                }
            },
        );

        if want_streaming {
            render_offers(&offers, output);
        }
        if want_trailer {
            render_trailer(trailer_url.as_deref(), output);
        }
        if want_similar {
            render_similar(&similar_titles, output);
        }
    }

    Ok(())
}

pub(crate) fn render_record(record: &MovieRecord, output: &Output) {
    if !output.is_human() {
        output.json(&serde_json::to_value(record).unwrap_or_default());
        return;
    }

    println!();
    println!(
        "  {} ({})",
        record.title.bold().cyan(),
        record.display_year()
    );

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.add_row(vec![Cell::new("IMDb Rating"), Cell::new(record.rating_or_na())]);
    if let Some(genre) = &record.genre {
        table.add_row(vec![Cell::new("Genre"), Cell::new(genre)]);
    }
    if let Some(runtime) = &record.runtime {
        table.add_row(vec![Cell::new("Runtime"), Cell::new(runtime)]);
    }
    if let Some(director) = &record.director {
        table.add_row(vec![Cell::new("Director"), Cell::new(director)]);
    }
    if let Some(actors) = &record.actors {
        table.add_row(vec![Cell::new("Actors"), Cell::new(actors)]);
    }
    if let Some(tagline) = record.extra_str("tagline").filter(|t| !t.is_empty()) {
        table.add_row(vec![Cell::new("Tagline"), Cell::new(tagline)]);
    }
    println!("{}", table);

    if let Some(plot) = &record.plot {
        println!("\n{}", plot);
    }
    if let Some(poster) = record.poster_url() {
        println!("\n{} {}", "Poster:".dimmed(), poster);
    }
}

pub(crate) fn render_offers(offers: &[StreamingOffer], output: &Output) {
    if !output.is_human() {
        output.json(&json!({"streaming": offers}));
        return;
    }

    if offers.is_empty() {
        output.info("Streaming availability could not be determined.");
        return;
    }

    println!("\n{}", "Available on:".bold());
    for offer in offers {
        println!("  {} - {}", offer.name, offer.web_url);
    }
}

pub(crate) fn render_trailer(trailer_url: Option<&str>, output: &Output) {
    if !output.is_human() {
        output.json(&json!({"trailer": trailer_url}));
        return;
    }

    match trailer_url {
        Some(url) => println!("\n{} {}", "Trailer:".bold(), url),
        None => output.info("Trailer not available."),
    }
}

pub(crate) fn render_similar(titles: &[MovieSummary], output: &Output) {
    if !output.is_human() {
        output.json(&json!({"similar": titles}));
        return;
    }

    if titles.is_empty() {
        output.info("No similar titles available.");
        return;
    }

    println!("\n{}", "Similar titles:".bold());
    for summary in titles.iter().take(6) {
        println!(
            "  {} ({}) ⭐ {:.1}",
            summary.title, summary.year, summary.rating
        );
    }
}
