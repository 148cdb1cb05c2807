use crate::extractor::models::{DownloadOptions, MediaInfo};
use crate::utils::error::ProviderFailure;
use async_trait::async_trait;

/// The external media-info/download capability.
///
/// This trait isolates the enumerator and fetchers from how the provider is
/// reached (a yt-dlp subprocess in production, a scripted stand-in in tests).
#[async_trait]
pub trait MediaProvider: Send + Sync {
    /// Returns a short identifier for logging (e.g., "yt-dlp")
    fn id(&self) -> &'static str;

    /// Extracts full format metadata for `url` without downloading anything
    async fn extract_info(&self, url: &str) -> Result<MediaInfo, ProviderFailure>;

    /// Downloads `url` according to `options` and returns the provider's
    /// status code (0 means success)
    async fn download(&self, url: &str, options: &DownloadOptions) -> Result<i32, ProviderFailure>;
}
