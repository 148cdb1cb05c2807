//! Content and generic fetchers
//!
//! Each fetch is a single provider download. The `Result` API is the primary
//! one; the `*_status` methods keep the older sentinel encodings for callers
//! that parse them.

use crate::downloader::request::{DownloadRequest, MediaKind};
use crate::extractor::traits::MediaProvider;
use crate::utils::error::ProviderFailure;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Content fetch sentinel for a completed download
pub const CONTENT_SUCCESS: u8 = 100;
/// Content fetch sentinel for any failure
pub const CONTENT_FAILURE: u8 = 0;

pub const GENERIC_SUCCESS: &str = "success";
pub const GENERIC_FAILURE: &str = "failure";

/// How a download that ran to the end turned out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Completed,
    /// The provider reported a non-zero status
    Failed { status: i32 },
}

impl FetchOutcome {
    pub fn from_status(status: i32) -> Self {
        if status == 0 {
            FetchOutcome::Completed
        } else {
            FetchOutcome::Failed { status }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Completed)
    }
}

async fn run(
    provider: &dyn MediaProvider,
    request: &DownloadRequest,
) -> Result<FetchOutcome, ProviderFailure> {
    let options = request.to_options();
    info!("URL: {}", request.url);
    info!("Saving to: {}", request.download_dir.display());

    let status = provider.download(&request.url, &options).await?;
    let outcome = FetchOutcome::from_status(status);
    if !outcome.is_success() {
        warn!("{} exited with status {} for {}", provider.id(), status, request.url);
    }
    Ok(outcome)
}

/// Downloads one explicitly chosen format as `video.<ext>` or `audio.<ext>`
pub struct ContentFetcher {
    provider: Arc<dyn MediaProvider>,
}

impl ContentFetcher {
    pub fn new(provider: Arc<dyn MediaProvider>) -> Self {
        Self { provider }
    }

    pub async fn fetch(
        &self,
        format_id: &str,
        url: &str,
        is_video: bool,
        download_dir: &Path,
    ) -> Result<FetchOutcome, ProviderFailure> {
        let kind = MediaKind::from_is_video(is_video);
        info!("Downloading {} with itag: {}", kind.file_prefix(), format_id);

        let request = DownloadRequest::content(format_id, url, kind, download_dir);
        run(self.provider.as_ref(), &request).await
    }

    /// [`CONTENT_SUCCESS`] when the provider reports status 0, otherwise
    /// [`CONTENT_FAILURE`] (including provider errors)
    pub async fn fetch_status(
        &self,
        format_id: &str,
        url: &str,
        is_video: bool,
        download_dir: &Path,
    ) -> u8 {
        match self.fetch(format_id, url, is_video, download_dir).await {
            Ok(FetchOutcome::Completed) => CONTENT_SUCCESS,
            Ok(FetchOutcome::Failed { .. }) => CONTENT_FAILURE,
            Err(e) => {
                let kind = MediaKind::from_is_video(is_video);
                error!("Error during {} download: {}", kind.file_prefix(), e);
                CONTENT_FAILURE
            }
        }
    }
}

/// Downloads the best available video+audio, saved under the source's title
pub struct GenericFetcher {
    provider: Arc<dyn MediaProvider>,
}

impl GenericFetcher {
    pub fn new(provider: Arc<dyn MediaProvider>) -> Self {
        Self { provider }
    }

    pub async fn fetch(
        &self,
        url: &str,
        mux_tool: &Path,
        download_dir: &Path,
    ) -> Result<FetchOutcome, ProviderFailure> {
        info!("Downloading video from URL: {}", url);
        info!("Using FFmpeg binary at: {}", mux_tool.display());

        let request = DownloadRequest::best_available(url, mux_tool, download_dir);
        run(self.provider.as_ref(), &request).await
    }

    /// `"success"` or `"failure"` from the provider status; on a provider
    /// error, the error message itself
    pub async fn fetch_status(&self, url: &str, mux_tool: &Path, download_dir: &Path) -> String {
        match self.fetch(url, mux_tool, download_dir).await {
            Ok(FetchOutcome::Completed) => GENERIC_SUCCESS.to_string(),
            Ok(FetchOutcome::Failed { .. }) => GENERIC_FAILURE.to_string(),
            Err(e) => {
                error!("Error downloading video: {}", e);
                e.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_status() {
        assert_eq!(FetchOutcome::from_status(0), FetchOutcome::Completed);
        assert_eq!(FetchOutcome::from_status(1), FetchOutcome::Failed { status: 1 });
        assert!(!FetchOutcome::from_status(-1).is_success());
    }
}
