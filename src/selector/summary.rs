//! Human-readable stream summary and its parser
//!
//! Rendered form, one line per kind:
//!
//! ```text
//! Available Resolutions (Video): 1080p (itag=137, Size=48.12 MB), 720p (itag=22)
//! Available Bitrates (Audio): 129.476 kbps (itag=140, Size=3.10 MB)
//! ```

use crate::extractor::models::Bitrate;
use crate::selector::table::{BestEntry, BestStreamTable};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const VIDEO_PREFIX: &str = "Available Resolutions (Video): ";
pub const AUDIO_PREFIX: &str = "Available Bitrates (Audio): ";

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

lazy_static! {
    static ref VIDEO_ENTRY: Regex =
        Regex::new(r"(\d+p)\s*\(itag=([^,)]+)(?:,\s*Size=([^)]+))?\)").unwrap();
    static ref AUDIO_ENTRY: Regex =
        Regex::new(r"([\d.]+)\s*kbps\s*\(itag=([^,)]+)(?:,\s*Size=([^)]+))?\)").unwrap();
}

/// One selectable stream as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamOption {
    /// "720p" or "129.476 kbps"
    pub quality: String,
    /// Format identifier to hand back to the content fetcher
    pub itag: String,
    /// "5.00 MB", absent when the provider reported no size
    pub size: Option<String>,
}

impl StreamOption {
    fn new(quality: String, entry: &BestEntry) -> Self {
        Self {
            quality,
            itag: entry.id.clone(),
            size: format_size(entry.size),
        }
    }
}

impl fmt::Display for StreamOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.size {
            Some(size) => write!(f, "{} (itag={}, Size={})", self.quality, self.itag, size),
            None => write!(f, "{} (itag={})", self.quality, self.itag),
        }
    }
}

/// Best video streams (highest resolution first) and best audio streams
/// (highest bitrate first)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamSummary {
    pub video: Vec<StreamOption>,
    pub audio: Vec<StreamOption>,
}

impl StreamSummary {
    pub fn from_table(table: &BestStreamTable) -> Self {
        let video = table
            .video()
            .into_iter()
            .map(|(resolution, entry)| StreamOption::new(format!("{}p", resolution), entry))
            .collect();
        let audio = table
            .audio()
            .into_iter()
            .map(|(bitrate, entry)| StreamOption::new(bitrate_label(bitrate), entry))
            .collect();

        Self { video, audio }
    }

    /// Parse a rendered summary back into stream options.
    ///
    /// Returns `None` when the text is not a summary (e.g. an `Error: ...`
    /// string).
    pub fn parse(text: &str) -> Option<Self> {
        let mut summary = Self::default();
        let mut recognized = false;

        for line in text.lines() {
            if let Some(rest) = line.strip_prefix(VIDEO_PREFIX.trim_end()) {
                recognized = true;
                summary.video = scan(&VIDEO_ENTRY, rest, |quality| quality.to_string());
            } else if let Some(rest) = line.strip_prefix(AUDIO_PREFIX.trim_end()) {
                recognized = true;
                summary.audio = scan(&AUDIO_ENTRY, rest, |bitrate| format!("{} kbps", bitrate));
            }
        }

        recognized.then_some(summary)
    }

    pub fn is_empty(&self) -> bool {
        self.video.is_empty() && self.audio.is_empty()
    }
}

impl fmt::Display for StreamSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}\n{}{}",
            VIDEO_PREFIX,
            join(&self.video),
            AUDIO_PREFIX,
            join(&self.audio)
        )
    }
}

fn join(options: &[StreamOption]) -> String {
    options
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn scan(pattern: &Regex, line: &str, quality: impl Fn(&str) -> String) -> Vec<StreamOption> {
    pattern
        .captures_iter(line)
        .map(|caps| StreamOption {
            quality: quality(&caps[1]),
            itag: caps[2].to_string(),
            size: caps.get(3).map(|m| m.as_str().to_string()),
        })
        .collect()
}

/// Size in MB with two decimals, `None` for an unknown (zero) size
pub fn format_size(bytes: u64) -> Option<String> {
    if bytes == 0 {
        None
    } else {
        Some(format!("{:.2} MB", bytes as f64 / BYTES_PER_MB))
    }
}

/// Bitrate as yt-dlp reported it: `128 kbps`, `129.0 kbps`, `129.476 kbps`
pub fn bitrate_label(bitrate: &Bitrate) -> String {
    format!("{} kbps", bitrate)
}
