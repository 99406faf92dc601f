use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration: one section per external provider.
///
/// Every section is optional; a missing or disabled section means that
/// gateway is simply not built. Only the primary metadata provider is
/// required for lookups to work at all.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub omdb: ProviderConfig,
    #[serde(default)]
    pub tmdb: ProviderConfig,
    #[serde(default)]
    pub watchmode: ProviderConfig,
    #[serde(default)]
    pub youtube: ProviderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub api_key: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: String::new(),
        }
    }
}

impl ProviderConfig {
    /// The API key, if this provider should be used at all.
    pub fn active_key(&self) -> Option<&str> {
        if self.enabled && !self.api_key.is_empty() {
            Some(&self.api_key)
        } else {
            None
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Commented starter config written by `config init`.
    pub fn template() -> &'static str {
        r#"# cinefile configuration
#
# Each provider needs its own API key. Leave a key empty (or set
# enabled = false) to skip that provider. Without [tmdb] you lose
# suggestions, trending, genre discovery, similar titles, and the
# enriched detail fields; without [watchmode] streaming availability;
# without [youtube] trailer lookup. [omdb] is required for lookups.

[omdb]
enabled = true
api_key = ""

[tmdb]
enabled = true
api_key = ""

[watchmode]
enabled = true
api_key = ""

[youtube]
enabled = true
api_key = ""
"#
    }
}
