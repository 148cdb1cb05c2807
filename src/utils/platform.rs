//! Platform-specific directories for streamgrab
//!
//! - Config: ~/.config/streamgrab (Linux), ~/Library/Application Support/streamgrab (macOS),
//!   %APPDATA%\streamgrab (Windows)
//! - Downloads: ~/Downloads/streamgrab on every platform

use std::path::PathBuf;

const APP_DIR: &str = "streamgrab";

/// Returns the configuration directory
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Returns the settings file location inside [`config_dir`]
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

/// Returns the default download directory
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}
