//! Classification of provider formats into video and audio variants

use crate::extractor::models::{Bitrate, Format};

/// A format reduced to what stream selection needs
#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
    Video { resolution: u32, size: u64, id: String },
    Audio { bitrate: Bitrate, size: u64, id: String },
}

impl Variant {
    /// Classify one format.
    ///
    /// A format with a video codec is always video, even when it also carries
    /// audio; it is never considered for the audio side. Returns `None` when
    /// the format has neither track, lacks its key (height for video, total
    /// bitrate for audio) or has an empty id.
    pub fn classify(format: &Format) -> Option<Self> {
        if format.format_id.is_empty() {
            return None;
        }
        let id = format.format_id.clone();

        if format.has_video() {
            Some(Variant::Video {
                resolution: format.height?,
                size: format.size(),
                id,
            })
        } else if format.has_audio() {
            Some(Variant::Audio {
                bitrate: format.tbr.clone()?,
                size: format.size(),
                id,
            })
        } else {
            None
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Variant::Video { id, .. } | Variant::Audio { id, .. } => id,
        }
    }

    pub fn size(&self) -> u64 {
        match self {
            Variant::Video { size, .. } | Variant::Audio { size, .. } => *size,
        }
    }
}

/// Classify every format in provider order, dropping the unusable ones
pub fn classify_all(formats: &[Format]) -> Vec<Variant> {
    formats.iter().filter_map(Variant::classify).collect()
}
