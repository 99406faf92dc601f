use std::io::{BufRead, Write};

use color_eyre::Result;
use movie_meta_core::Session;
use movie_meta_models::MovieRecord;
use owo_colors::OwoColorize;

use crate::output::Output;

use super::discover::{genre_id, render_listing};
use super::lookup::{render_offers, render_record, render_similar, render_trailer};
use super::{build_orchestrator, to_eyre};

const HELP: &str = "\
Commands:
  <title>            look up a movie (also: lookup <title>)
  suggest <query>    typeahead suggestions
  trending           movies trending this week
  genre <name>       popular movies in a genre
  streaming          streaming offers for the last looked-up movie
  trailer            official trailer for the last looked-up movie
  similar            similar titles for the last looked-up movie
  fav                add the last looked-up movie to favorites
  unfav <title>      remove a favorite
  favs               list favorites
  history            list recent searches
  forget <title>     remove one entry from history
  clear history      empty the search history
  clear favs         empty the favorites list
  help               show this help
  quit               leave the shell";

/// Interactive session. History and favorites live exactly as long as
/// this loop; nothing is persisted.
pub async fn run_shell(output: &Output) -> Result<()> {
    let orchestrator = build_orchestrator().map_err(to_eyre)?;
    let mut session = Session::new();
    let mut current: Option<MovieRecord> = None;

    output.println("CineFile interactive shell. Type 'help' for commands, 'quit' to leave.");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", "cinefile>".bold().cyan());
        std::io::stdout().flush().ok();

        let Some(Ok(line)) = lines.next() else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match (command.to_lowercase().as_str(), rest) {
            ("quit", _) | ("exit", _) => break,
            ("help", _) => output.println(HELP),
            ("suggest", "") => output.warn("Usage: suggest <query>"),
            ("suggest", query) => {
                let suggestions = orchestrator.suggestions(query).await;
                render_listing("Suggestions", &suggestions, false, output);
            }
            ("trending", _) => {
                let trending = orchestrator.trending().await;
                render_listing("Trending this week", &trending, true, output);
            }
            ("genre", "") => output.warn("Usage: genre <name>"),
            ("genre", name) => match genre_id(name) {
                Some(id) => {
                    let movies = orchestrator.movies_by_genre(id).await;
                    render_listing(&format!("Popular in {}", name), &movies, true, output);
                }
                None => output.warn(format!("Unknown genre '{}'.", name)),
            },
            ("streaming", _) => match &current {
                Some(record) => {
                    render_offers(&orchestrator.streaming_offers(record).await, output)
                }
                None => output.warn("Look up a movie first."),
            },
            ("trailer", _) => match &current {
                Some(record) => {
                    render_trailer(orchestrator.trailer_url(record).await.as_deref(), output)
                }
                None => output.warn("Look up a movie first."),
            },
            ("similar", _) => match &current {
                Some(record) => render_similar(&orchestrator.similar(record).await, output),
                None => output.warn("Look up a movie first."),
            },
            ("fav", _) => match &current {
                Some(record) => {
                    if session.add_favorite(record) {
                        output.success(format!("Added '{}' to favorites.", record.title));
                    } else {
                        output.info(format!("'{}' is already a favorite.", record.title));
                    }
                }
                None => output.warn("Look up a movie first."),
            },
            ("unfav", "") => output.warn("Usage: unfav <title>"),
            ("unfav", title) => {
                session.remove_favorite(title);
                output.success(format!("Removed '{}' from favorites.", title));
            }
            ("favs", _) | ("favorites", _) => {
                if session.favorites().is_empty() {
                    output.info("No favorites yet.");
                } else {
                    for item in session.favorites() {
                        println!("  {} ({}) ⭐ {}", item.title, item.year, item.rating);
                    }
                }
            }
            ("history", _) => {
                if session.history().is_empty() {
                    output.info("No searches yet.");
                } else {
                    for item in session.history() {
                        println!("  {} ({})", item.title, item.year);
                    }
                }
            }
            ("forget", "") => output.warn("Usage: forget <title>"),
            ("forget", title) => {
                session.remove_from_history(title);
                output.success(format!("Removed '{}' from history.", title));
            }
            ("clear", "history") => {
                session.clear_history();
                output.success("Search history cleared.");
            }
            ("clear", "favs") | ("clear", "favorites") => {
                session.clear_favorites();
                output.success("Favorites cleared.");
            }
            ("clear", _) => output.warn("Usage: clear history | clear favs"),
            ("lookup", "") => output.warn("Usage: lookup <title>"),
            _ => {
                // Anything else is a title lookup.
                let title = if command.eq_ignore_ascii_case("lookup") {
                    rest
                } else {
                    line
                };
                match orchestrator.lookup_movie(title).await {
                    Ok(record) => {
                        session.record_search(&record);
                        render_record(&record, output);
                        current = Some(record);
                    }
                    Err(err) => output.error(err.to_string()),
                }
            }
        }
    }

    Ok(())
}
