use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::error::ConfigError;
use crate::image::PLACEHOLDER_IMAGE;

/// Tunables for a horde session.
///
/// Every field is optional in a config file; missing ones keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HordeConfig {
    /// Total horde strength; releases stop adding tokens once this many cards are played
    pub max_cards: u32,
    /// Percent chance (out of 100) that another token joins the current wave
    pub release_chance: u32,
    pub api_base: String,
    pub token_query: String,
    pub zombie_query: String,
    pub placeholder_image: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
}

impl Default for HordeConfig {
    fn default() -> Self {
        Self {
            max_cards: 100,
            release_chance: 60,
            api_base: "https://api.scryfall.com".to_string(),
            token_query:
                "-o:flying type:creature type:token type:zombie -is:funny power>0 tou>0"
                    .to_string(),
            zombie_query:
                "-o:flying type:zombie type:creature color:black -t:token -is:funny power>0 tou>0"
                    .to_string(),
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            user_agent: concat!("zombie-horde/", env!("CARGO_PKG_VERSION")).to_string(),
            request_timeout_secs: 10,
        }
    }
}

/// `HORDE_CONFIG` if set, otherwise `horde.json` in the working directory
pub fn default_config_path() -> PathBuf {
    std::env::var_os("HORDE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("horde.json"))
}

impl HordeConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let body = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&body).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`HordeConfig::load`], but a missing file means the defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn token_search_url(&self) -> String {
        format!("{}/cards/search", self.api_base.trim_end_matches('/'))
    }

    pub fn random_card_url(&self) -> String {
        format!("{}/cards/random", self.api_base.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: HordeConfig =
            serde_json::from_str(r#"{"max_cards": 40, "api_base": "http://localhost:8080/"}"#)
                .unwrap();

        assert_eq!(config.max_cards, 40);
        assert_eq!(config.release_chance, 60);
        assert_eq!(config.token_search_url(), "http://localhost:8080/cards/search");
        assert_eq!(config.random_card_url(), "http://localhost:8080/cards/random");
    }

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("horde-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = scratch_file("missing.json");

        let config = HordeConfig::load_or_default(&path).unwrap();

        assert_eq!(config, HordeConfig::default());
    }

    #[test]
    fn test_file_overrides_some_fields() {
        let path = scratch_file("partial.json");
        fs::write(&path, r#"{"release_chance": 75, "request_timeout_secs": 3}"#).unwrap();

        let config = HordeConfig::load_or_default(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.release_chance, 75);
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.max_cards, 100);
    }

    #[test]
    fn test_broken_file_is_an_error() {
        let path = scratch_file("broken.json");
        fs::write(&path, "{ max_cards: ").unwrap();

        let result = HordeConfig::load_or_default(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
