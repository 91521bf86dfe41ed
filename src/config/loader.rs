use std::env;
use std::path::Path;

use tokio::fs;
use tracing::{info, warn};

use crate::types::PollerError;

use super::{paths, Config};

impl Config {
    /// Load configuration from config.json in the app directory, then apply
    /// environment overrides.
    /// Falls back to defaults if the file doesn't exist or can't be parsed
    pub async fn load() -> Self {
        let mut config = match Self::try_load().await {
            Ok(config) => config,
            Err(err) => {
                warn!(error = ?err, "Failed to load config.json, using defaults");
                Self::default()
            }
        };
        config.apply_overrides(|key| env::var(key).ok());

        info!(
            api = %config.github_api_url,
            interval_minutes = config.poll_interval_display_minutes(),
            debug = config.debug,
            "Loaded configuration"
        );
        config
    }

    async fn try_load() -> Result<Self, PollerError> {
        let config_path = paths::get_config_path()?;
        Self::load_from(&config_path).await
    }

    /// Read a config file from an explicit path; a missing file yields defaults.
    pub async fn load_from(config_path: &Path) -> Result<Self, PollerError> {
        if !config_path.exists() {
            warn!(path = %config_path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(config_path)
            .await
            .map_err(|err| PollerError::Config(format!("Failed to read config file: {err}")))?;

        serde_json::from_str(&contents)
            .map_err(|err| PollerError::Config(format!("Failed to parse config.json: {err}")))
    }

    /// Apply `GH_TOKEN`, `GITHUB_API_URL`, `PRLIST_POLL_MINUTES` and `PRLIST_DEBUG`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("GH_TOKEN").filter(|value| !value.trim().is_empty()) {
            self.github_token = Some(token.trim().to_string());
        }
        if let Some(url) = lookup("GITHUB_API_URL").filter(|value| !value.trim().is_empty()) {
            self.github_api_url = url.trim().to_string();
        }
        if let Some(minutes) = lookup("PRLIST_POLL_MINUTES") {
            match minutes.trim().parse::<u64>() {
                Ok(parsed) => self.poll_interval_minutes = parsed,
                Err(err) => {
                    warn!(value = %minutes, error = %err, "Ignoring invalid PRLIST_POLL_MINUTES")
                }
            }
        }
        if let Some(debug) = lookup("PRLIST_DEBUG") {
            self.debug = matches!(
                debug.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            );
        }
    }
}
