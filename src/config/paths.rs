use std::path::PathBuf;
use tracing::{debug, warn};

use crate::types::PollerError;

/// Get the path to the config.json file
/// Looks for config.json in the app directory (parent of the binary's folder)
pub(super) fn get_config_path() -> Result<PathBuf, PollerError> {
    // Executable is at: app_root/bin/prlist
    // Config should be at: app_root/config.json
    if let Ok(exe_path) = std::env::current_exe() {
        debug!(path = %exe_path.display(), "Executable path detected");

        if let Some(app_root) = exe_path.parent().and_then(|bin_dir| bin_dir.parent()) {
            let config_path = app_root.join("config.json");
            if config_path.exists() {
                debug!(path = %config_path.display(), "Using config next to install root");
                return Ok(config_path);
            }
        }
    }

    warn!("Using fallback: looking for config.json in current directory");
    let cwd = std::env::current_dir()
        .map_err(|err| PollerError::Config(format!("Failed to determine working dir: {err}")))?;
    Ok(cwd.join("config.json"))
}
