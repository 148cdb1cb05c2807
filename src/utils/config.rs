//! Application configuration
//!
//! Settings come from `settings.json` in the config directory (when present),
//! then `STREAMGRAB_*` environment variables; CLI flags override both.

use crate::utils::platform;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ENV_YTDLP: &str = "STREAMGRAB_YTDLP";
pub const ENV_FFMPEG: &str = "STREAMGRAB_FFMPEG";
pub const ENV_DOWNLOAD_DIR: &str = "STREAMGRAB_DOWNLOAD_DIR";

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Download location
    pub download_location: PathBuf,

    /// yt-dlp binary to use instead of searching for one
    pub ytdlp_path: Option<PathBuf>,

    /// ffmpeg binary handed to yt-dlp for merging
    pub ffmpeg_path: Option<PathBuf>,

    /// Pass `--quiet` to yt-dlp
    pub quiet: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            download_location: platform::default_download_dir(),
            ytdlp_path: None,
            ffmpeg_path: None,
            quiet: false,
        }
    }
}

impl AppSettings {
    /// Settings file (if any) plus environment overrides
    pub fn load() -> Result<Self> {
        let mut settings = Self::load_from(&platform::settings_path())?;
        settings.apply_env(|key| std::env::var(key).ok());
        Ok(settings)
    }

    /// Read settings from `path`, falling back to defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings = serde_json::from_str(&raw)
            .with_context(|| format!("parsing settings in {}", path.display()))?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Override fields from environment variables looked up through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = non_empty(ENV_YTDLP) {
            self.ytdlp_path = Some(PathBuf::from(path));
        }
        if let Some(path) = non_empty(ENV_FFMPEG) {
            self.ffmpeg_path = Some(PathBuf::from(path));
        }
        if let Some(dir) = non_empty(ENV_DOWNLOAD_DIR) {
            self.download_location = PathBuf::from(dir);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppSettings::default();
        assert!(config.download_location.ends_with("streamgrab"));
        assert!(config.ytdlp_path.is_none());
        assert!(!config.quiet);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let settings = AppSettings::load_from(&temp.path().join("settings.json")).unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("settings.json");
        std::fs::write(&path, r#"{"quiet": true, "ffmpeg_path": "/opt/ffmpeg"}"#).unwrap();

        let settings = AppSettings::load_from(&path).unwrap();
        assert!(settings.quiet);
        assert_eq!(settings.ffmpeg_path, Some(PathBuf::from("/opt/ffmpeg")));
        assert_eq!(settings.download_location, AppSettings::default().download_location);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(AppSettings::load_from(&path).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_YTDLP, "/custom/yt-dlp"),
            (ENV_DOWNLOAD_DIR, "/srv/media"),
            (ENV_FFMPEG, "  "),
        ]
        .into_iter()
        .collect();

        let mut settings = AppSettings::default();
        settings.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(settings.ytdlp_path, Some(PathBuf::from("/custom/yt-dlp")));
        assert_eq!(settings.download_location, PathBuf::from("/srv/media"));
        assert_eq!(settings.ffmpeg_path, None);
    }
}
