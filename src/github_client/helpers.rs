use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::types::PollerError;

pub const ISSUES_PER_PAGE: u32 = 100;
pub const USER_AGENT: &str = "prlist";

/// Token from config (environment overrides already applied), trimmed.
pub fn resolve_token(config: &Config) -> Result<String, PollerError> {
    config
        .github_token
        .as_deref()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or(PollerError::MissingToken)
}

/// Compact age of a timestamp relative to `now`, e.g. `3h 12m`.
pub fn format_age(opened_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(opened_at);
    if duration.num_seconds() < 60 {
        return "just now".to_string();
    }

    let days = duration.num_days();
    let hours = duration.num_hours() % 24;
    let minutes = duration.num_minutes() % 60;
    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
