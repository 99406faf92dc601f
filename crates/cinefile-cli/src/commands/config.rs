use color_eyre::Result;
use comfy_table::{Cell, Table};
use movie_meta_config::{Config, PathManager, ProviderConfig};
use serde_json::json;

use crate::output::Output;

use super::to_eyre;

fn mask_key(key: &str) -> String {
    if key.is_empty() {
        "(not set)".to_string()
    } else if key.len() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", &key[..4])
    }
}

fn describe(provider: &ProviderConfig) -> (bool, String) {
    (provider.enabled, mask_key(&provider.api_key))
}

pub fn run_show(output: &Output) -> Result<()> {
    let paths = PathManager::default();
    let config_file = paths.config_file();

    if !config_file.exists() {
        output.warn(format!(
            "No config file at {}. Run `cinefile config init` to create one.",
            config_file.display()
        ));
        return Ok(());
    }

    let config = Config::load(&config_file).map_err(to_eyre)?;
    let sections = [
        ("omdb", describe(&config.omdb)),
        ("tmdb", describe(&config.tmdb)),
        ("watchmode", describe(&config.watchmode)),
        ("youtube", describe(&config.youtube)),
    ];

    if output.is_human() {
        output.println(format!("Config file: {}", config_file.display()));

        let mut table = Table::new();
        table.load_preset(comfy_table::presets::UTF8_FULL);
        table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
        table.set_header(vec![
            Cell::new("Provider").add_attribute(comfy_table::Attribute::Bold),
            Cell::new("Enabled").add_attribute(comfy_table::Attribute::Bold),
            Cell::new("API Key").add_attribute(comfy_table::Attribute::Bold),
        ]);
        for (provider, (enabled, key)) in &sections {
            table.add_row(vec![
                Cell::new(*provider),
                Cell::new(if *enabled { "yes" } else { "no" }),
                Cell::new(key),
            ]);
        }
        println!("{}", table);
    } else {
        let payload: serde_json::Map<String, serde_json::Value> = sections
            .iter()
            .map(|(provider, (enabled, key))| {
                (
                    provider.to_string(),
                    json!({"enabled": enabled, "api_key": key}),
                )
            })
            .collect();
        output.json(&serde_json::Value::Object(payload));
    }

    Ok(())
}

pub fn run_init(force: bool, output: &Output) -> Result<()> {
    let paths = PathManager::default();
    paths.ensure_directories().map_err(to_eyre)?;
    let config_file = paths.config_file();

    if config_file.exists() && !force {
        output.warn(format!(
            "Config file already exists at {}. Use --force to overwrite it.",
            config_file.display()
        ));
        return Ok(());
    }

    std::fs::write(&config_file, Config::template())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to write {}: {}", config_file.display(), e))?;
    output.success(format!("Wrote starter config to {}", config_file.display()));
    output.info("Fill in the API keys, then run `cinefile check` to verify them.");
    Ok(())
}
