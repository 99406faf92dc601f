use color_eyre::Result;
use movie_meta_models::MovieSummary;
use owo_colors::OwoColorize;
use serde_json::json;

use crate::output::Output;

use super::{build_orchestrator, to_eyre};

/// Genre name to secondary-provider genre id.
pub(crate) const GENRES: &[(&str, u32)] = &[
    ("Action", 28),
    ("Comedy", 35),
    ("Drama", 18),
    ("Horror", 27),
    ("Sci-Fi", 878),
    ("Romance", 10749),
    ("Thriller", 53),
    ("Animation", 16),
    ("Documentary", 99),
    ("Fantasy", 14),
];

pub(crate) fn genre_id(name: &str) -> Option<u32> {
    GENRES
        .iter()
        .find(|(genre, _)| genre.eq_ignore_ascii_case(name))
        .map(|(_, id)| *id)
}

pub async fn run_suggest(query: &str, output: &Output) -> Result<()> {
    let orchestrator = build_orchestrator().map_err(to_eyre)?;
    let suggestions = orchestrator.suggestions(query).await;
    render_listing("Suggestions", &suggestions, false, output);
    Ok(())
}

pub async fn run_trending(output: &Output) -> Result<()> {
    let orchestrator = build_orchestrator().map_err(to_eyre)?;
    let trending = orchestrator.trending().await;
    render_listing("Trending this week", &trending, true, output);
    Ok(())
}

pub async fn run_genre(name: Option<&str>, list: bool, output: &Output) -> Result<()> {
    if list || name.is_none() {
        let names: Vec<&str> = GENRES.iter().map(|(genre, _)| *genre).collect();
        if output.is_human() {
            output.println(format!("Known genres: {}", names.join(", ")));
        } else {
            output.json(&json!({"genres": names}));
        }
        return Ok(());
    }

    let name = name.unwrap_or_default();
    let Some(id) = genre_id(name) else {
        output.error(format!(
            "Unknown genre '{}'. Run `cinefile genre --list` for the known names.",
            name
        ));
        std::process::exit(1);
    };

    let orchestrator = build_orchestrator().map_err(to_eyre)?;
    let movies = orchestrator.movies_by_genre(id).await;
    render_listing(&format!("Popular in {}", name), &movies, true, output);
    Ok(())
}

pub(crate) fn render_listing(
    heading: &str,
    items: &[MovieSummary],
    numbered: bool,
    output: &Output,
) {
    if !output.is_human() {
        output.json(&json!({"results": items}));
        return;
    }

    if items.is_empty() {
        output.info(format!("{}: nothing available right now.", heading));
        return;
    }

    println!("{}", heading.bold());
    for (index, summary) in items.iter().enumerate() {
        if numbered {
            println!(
                "  {:>2}. {} ({}) ⭐ {:.1}",
                index + 1,
                summary.title,
                summary.year,
                summary.rating
            );
        } else {
            println!("  {} ({}) ⭐ {:.1}", summary.title, summary.year, summary.rating);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_lookup_is_case_insensitive() {
        assert_eq!(genre_id("sci-fi"), Some(878));
        assert_eq!(genre_id("ACTION"), Some(28));
        assert_eq!(genre_id("Westerns"), None);
    }
}
