//! Download requests and how they map onto provider options

use crate::extractor::models::DownloadOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Format selector used when no explicit format is given: separate best
/// video and best audio merged together, else the best single stream
pub const BEST_AVAILABLE: &str = "bestvideo+bestaudio/best";

/// File name template for best-available downloads
pub const TITLE_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Which half of a split stream a content download holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Video,
    Audio,
}

impl MediaKind {
    pub fn from_is_video(is_video: bool) -> Self {
        if is_video {
            MediaKind::Video
        } else {
            MediaKind::Audio
        }
    }

    /// File name stem the download is saved under
    pub fn file_prefix(&self) -> &'static str {
        match self {
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
        }
    }
}

/// What to download
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatChoice {
    /// A format id from the enumerator, passed to the provider verbatim
    Explicit { format_id: String, kind: MediaKind },
    /// Let the provider pick, merging with the tool at `mux_tool`
    BestAvailable { mux_tool: PathBuf },
}

/// One download: source URL, target directory and format choice.
///
/// The directory is passed through untouched; it is neither created nor
/// checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    pub download_dir: PathBuf,
    pub choice: FormatChoice,
}

impl DownloadRequest {
    pub fn content(
        format_id: impl Into<String>,
        url: impl Into<String>,
        kind: MediaKind,
        download_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            url: url.into(),
            download_dir: download_dir.into(),
            choice: FormatChoice::Explicit {
                format_id: format_id.into(),
                kind,
            },
        }
    }

    pub fn best_available(
        url: impl Into<String>,
        mux_tool: impl Into<PathBuf>,
        download_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            url: url.into(),
            download_dir: download_dir.into(),
            choice: FormatChoice::BestAvailable {
                mux_tool: mux_tool.into(),
            },
        }
    }

    /// Provider options for this request
    pub fn to_options(&self) -> DownloadOptions {
        match &self.choice {
            FormatChoice::Explicit { format_id, kind } => DownloadOptions {
                output_template: template(
                    &self.download_dir,
                    &format!("{}.%(ext)s", kind.file_prefix()),
                ),
                format: format_id.clone(),
                ffmpeg_location: None,
            },
            FormatChoice::BestAvailable { mux_tool } => DownloadOptions {
                output_template: template(&self.download_dir, TITLE_TEMPLATE),
                format: BEST_AVAILABLE.to_string(),
                ffmpeg_location: Some(mux_tool.clone()),
            },
        }
    }
}

fn template(dir: &Path, file_name: &str) -> String {
    dir.join(file_name).to_string_lossy().into_owned()
}
