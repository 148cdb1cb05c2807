//! Data structures for provider metadata and download options

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;
use std::path::PathBuf;

/// Codec value yt-dlp uses to say a stream carries no track of that kind
pub const NO_CODEC: &str = "none";

/// Media information for one URL, as reported by `yt-dlp --dump-single-json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Page the media was extracted from
    #[serde(default)]
    pub webpage_url: Option<String>,
    /// Direct media URL; only present when yt-dlp settled on a single format
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default)]
    pub extractor: Option<String>,
    #[serde(default)]
    pub formats: Vec<Format>,
}

/// One stream variant offered by the source site
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Format {
    #[serde(default)]
    pub format_id: String,
    #[serde(default)]
    pub ext: String,
    #[serde(default)]
    pub vcodec: Option<String>,
    #[serde(default)]
    pub acodec: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub fps: Option<f64>,
    #[serde(default)]
    pub tbr: Option<Bitrate>, // Total bitrate
    #[serde(default)]
    pub abr: Option<f64>, // Audio bitrate (kbps)
    #[serde(default)]
    pub filesize: Option<u64>,
    #[serde(default)]
    pub format_note: Option<String>,
}

impl Format {
    /// Whether the stream carries video.
    ///
    /// Only the literal `"none"` rules a track out; a missing codec field
    /// does not.
    pub fn has_video(&self) -> bool {
        self.vcodec.as_deref() != Some(NO_CODEC)
    }

    /// Whether the stream carries audio, with the same `"none"` rule.
    pub fn has_audio(&self) -> bool {
        self.acodec.as_deref() != Some(NO_CODEC)
    }

    /// Size in bytes, 0 when the provider did not report one
    pub fn size(&self) -> u64 {
        self.filesize.unwrap_or(0)
    }
}

/// Bitrate in kbps, kept in the form yt-dlp reported it.
///
/// An integer stays an integer when displayed (`128`), a float keeps its
/// fractional part (`129.0`, `129.476`). Equality compares the numeric value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bitrate(Number);

impl Bitrate {
    /// `None` for NaN or infinite values
    pub fn from_f64(kbps: f64) -> Option<Self> {
        Number::from_f64(kbps).map(Self)
    }

    pub fn kbps(&self) -> f64 {
        self.0.as_f64().unwrap_or(0.0)
    }
}

impl From<u32> for Bitrate {
    fn from(kbps: u32) -> Self {
        Self(Number::from(kbps))
    }
}

impl PartialEq for Bitrate {
    fn eq(&self, other: &Self) -> bool {
        self.kbps() == other.kbps()
    }
}

impl fmt::Display for Bitrate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Declarative options handed to the provider for one download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOptions {
    /// Output path template, e.g. `/downloads/video.%(ext)s`
    pub output_template: String,
    /// Format selector, either a format id or an expression like `bestvideo+bestaudio/best`
    pub format: String,
    /// Location of the external merge tool (ffmpeg)
    pub ffmpeg_location: Option<PathBuf>,
}
