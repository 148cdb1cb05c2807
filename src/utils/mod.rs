//! Utility modules for error handling, configuration and tool discovery

pub mod config;
pub mod error;
pub mod platform;
pub mod tools;

// Re-export for convenience
pub use config::AppSettings;
pub use error::ProviderFailure;
pub use platform::{config_dir, default_download_dir, settings_path};
pub use tools::{find_ffmpeg, find_ytdlp};
