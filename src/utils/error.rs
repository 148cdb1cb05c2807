//! Error handling for streamgrab

use thiserror::Error;

/// The single failure kind surfaced by the media provider.
///
/// Variants only record where the failure came from so it can be logged;
/// callers treat every variant the same way.
#[derive(Debug, Error)]
pub enum ProviderFailure {
    #[error("yt-dlp not found. Please install yt-dlp")]
    ToolNotFound,

    /// yt-dlp exited non-zero while extracting metadata; holds its stderr
    #[error("{0}")]
    Extraction(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("yt-dlp produced invalid UTF-8: {0}")]
    InvalidOutput(#[from] std::string::FromUtf8Error),

    #[error("yt-dlp was terminated by a signal")]
    Terminated,
}

impl ProviderFailure {
    /// Build an extraction failure from raw provider stderr.
    pub fn from_stderr(stderr: &[u8]) -> Self {
        let message = String::from_utf8_lossy(stderr).trim().to_string();
        if message.is_empty() {
            Self::Extraction("yt-dlp exited without an error message".to_string())
        } else {
            Self::Extraction(message)
        }
    }
}
