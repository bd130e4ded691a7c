// src/infra/paths.rs — Config file discovery
//
// SDQR_HOME overrides everything. Otherwise the platform config directory
// is used (~/.config/sdqr on Linux).

use directories::ProjectDirs;
use std::path::PathBuf;

/// Returns the SDQR_HOME override, if set.
fn sdqr_home() -> Option<PathBuf> {
    std::env::var_os("SDQR_HOME").map(PathBuf::from)
}

/// Configuration directory, if one can be determined for this user.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(home) = sdqr_home() {
        return Some(home);
    }
    ProjectDirs::from("", "", "sdqr").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path of the optional config.toml.
pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
