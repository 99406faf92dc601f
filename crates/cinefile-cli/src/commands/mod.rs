pub mod check;
pub mod config;
pub mod discover;
pub mod lookup;
pub mod shell;

use color_eyre::eyre::eyre;
use movie_meta_config::{Config, PathManager};
use movie_meta_core::LookupOrchestrator;
use movie_meta_providers::build_providers;

/// Convert library-layer anyhow errors for the eyre-based command layer.
pub(crate) fn to_eyre(err: anyhow::Error) -> color_eyre::Report {
    eyre!("{:#}", err)
}

pub(crate) fn load_config() -> anyhow::Result<Config> {
    let paths = PathManager::default();
    let config_file = paths.config_file();
    if !config_file.exists() {
        anyhow::bail!(
            "No config file at {}. Run `cinefile config init` to create one.",
            config_file.display()
        );
    }
    Config::load(&config_file)
}

pub(crate) fn build_orchestrator() -> anyhow::Result<LookupOrchestrator> {
    let config = load_config()?;
    let providers = build_providers(&config)?;
    LookupOrchestrator::from_providers(providers)
}
