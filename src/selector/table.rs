//! Best stream per resolution / bitrate

use crate::extractor::models::Bitrate;
use crate::selector::variant::Variant;
use std::cmp::Ordering;

/// The stream kept for one resolution or bitrate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestEntry {
    pub id: String,
    pub size: u64,
}

/// Largest stream per distinct video resolution and per distinct audio bitrate.
///
/// An entry is only replaced when a later stream is strictly larger, so on
/// equal sizes (including two unknown sizes) the first stream seen is kept.
#[derive(Debug, Clone, Default)]
pub struct BestStreamTable {
    video: Vec<(u32, BestEntry)>,
    audio: Vec<(Bitrate, BestEntry)>,
}

impl BestStreamTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table by offering every variant in order
    pub fn from_variants<I>(variants: I) -> Self
    where
        I: IntoIterator<Item = Variant>,
    {
        let mut table = Self::new();
        for variant in variants {
            table.offer(variant);
        }
        table
    }

    /// Record `variant` if its key is new or it beats the stored size
    pub fn offer(&mut self, variant: Variant) {
        match variant {
            Variant::Video { resolution, size, id } => {
                offer_slot(&mut self.video, resolution, BestEntry { id, size })
            }
            Variant::Audio { bitrate, size, id } => {
                offer_slot(&mut self.audio, bitrate, BestEntry { id, size })
            }
        }
    }

    /// Video entries, highest resolution first
    pub fn video(&self) -> Vec<(u32, &BestEntry)> {
        let mut entries: Vec<_> = self.video.iter().map(|(res, e)| (*res, e)).collect();
        entries.sort_by(|a, b| b.0.cmp(&a.0));
        entries
    }

    /// Audio entries, highest bitrate first
    pub fn audio(&self) -> Vec<(&Bitrate, &BestEntry)> {
        let mut entries: Vec<_> = self.audio.iter().map(|(bitrate, e)| (bitrate, e)).collect();
        entries.sort_by(|a, b| {
            b.0.kbps()
                .partial_cmp(&a.0.kbps())
                .unwrap_or(Ordering::Equal)
        });
        entries
    }

    pub fn video_entry(&self, resolution: u32) -> Option<&BestEntry> {
        self.video
            .iter()
            .find(|(res, _)| *res == resolution)
            .map(|(_, e)| e)
    }

    pub fn audio_entry(&self, bitrate: f64) -> Option<&BestEntry> {
        self.audio
            .iter()
            .find(|(kbps, _)| kbps.kbps() == bitrate)
            .map(|(_, e)| e)
    }

    pub fn is_empty(&self) -> bool {
        self.video.is_empty() && self.audio.is_empty()
    }
}

fn offer_slot<K: PartialEq>(slots: &mut Vec<(K, BestEntry)>, key: K, entry: BestEntry) {
    match slots.iter_mut().find(|(k, _)| *k == key) {
        Some((_, best)) => {
            if entry.size > best.size {
                *best = entry;
            }
        }
        None => slots.push((key, entry)),
    }
}
