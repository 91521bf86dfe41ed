use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Debug mode polls far more often so that failures surface quickly.
const DEBUG_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Longest accepted poll interval: one week.
const MAX_POLL_INTERVAL_MINUTES: u64 = 7 * 24 * 60;

/// Configuration for the pull request poller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub github_api_url: String,

    #[serde(default)]
    pub github_token: Option<String>,

    #[serde(default = "default_poll_interval_minutes")]
    pub poll_interval_minutes: u64,

    #[serde(default)]
    pub debug: bool,

    #[serde(default = "default_max_consecutive_failures")]
    pub max_consecutive_failures: u32,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_api_url: default_api_url(),
            github_token: None,
            poll_interval_minutes: default_poll_interval_minutes(),
            debug: false,
            max_consecutive_failures: default_max_consecutive_failures(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Interval between two polls of the GitHub API, clamped to between one
    /// minute and one week.
    pub fn poll_interval(&self) -> Duration {
        if self.debug {
            return DEBUG_POLL_INTERVAL;
        }
        let minutes = self
            .poll_interval_minutes
            .clamp(1, MAX_POLL_INTERVAL_MINUTES);
        Duration::from_secs(minutes.saturating_mul(60))
    }

    /// Interval in whole minutes, as shown in the status bar.
    pub fn poll_interval_display_minutes(&self) -> u64 {
        self.poll_interval().as_secs() / 60
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_poll_interval_minutes() -> u64 {
    5
}

fn default_max_consecutive_failures() -> u32 {
    3
}

fn default_request_timeout_secs() -> u64 {
    10
}
