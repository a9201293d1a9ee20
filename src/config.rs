use directories::ProjectDirs;
use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI preferences loaded from `~/.config/jread/config.toml`.
///
/// Only the command-line tool reads this; the library reader takes no
/// configuration.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format: "json", "yaml", "toml" or "ndjson"
    pub format: String,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "json".into(),
            pretty: true,
        }
    }
}

/// Get the configuration directory path.
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "jread").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the config file path.
pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location, or return defaults.
pub fn load_config() -> AppConfig {
    match config_file_path() {
        Some(path) => load_config_from(&path),
        None => AppConfig::default(),
    }
}

/// Load configuration from `path`. A missing file gives defaults silently;
/// an unreadable or malformed one gives defaults with a warning.
pub fn load_config_from(path: &Path) -> AppConfig {
    if !path.exists() {
        return AppConfig::default();
    }
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!("ignoring config {}: {e}", path.display());
            return AppConfig::default();
        }
    };
    match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            warn!("ignoring malformed config {}: {e}", path.display());
            AppConfig::default()
        }
    }
}
