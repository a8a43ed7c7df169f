use crate::i18n::Locale;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding the configured service base URL
pub const API_URL_ENV: &str = "PROCJENA_API_URL";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the prediction service; `/predict` is appended per request
    pub api_base_url: String,
    /// Display language, persisted across sessions
    #[serde(default)]
    pub locale: Locale,
    /// Color scheme, persisted across sessions
    #[serde(default)]
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            locale: Locale::En,
            theme: Theme::Dark,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".procjena-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// The base URL to use: the environment override wins over the file
    pub fn effective_api_base_url(&self) -> String {
        env::var(API_URL_ENV).unwrap_or_else(|_| self.api_base_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            api_base_url: "https://api.example".to_string(),
            locale: Locale::Bs,
            theme: Theme::Light,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.api_base_url, "https://api.example");
        assert_eq!(parsed.locale, Locale::Bs);
        assert_eq!(parsed.theme, Theme::Light);
    }

    #[test]
    fn test_fields_default_when_missing() {
        let parsed: Config = serde_json::from_str(r#"{"api_base_url": "http://x"}"#).unwrap();
        assert_eq!(parsed.locale, Locale::En);
        assert_eq!(parsed.theme, Theme::Dark);
    }
}
