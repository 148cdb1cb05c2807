//! Scripted media provider shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;
use streamgrab::extractor::{Bitrate, DownloadOptions, Format, MediaInfo, MediaProvider};
use streamgrab::ProviderFailure;

/// Replays a fixed answer for every call and records download requests.
pub struct ScriptedProvider {
    formats: Option<Vec<Format>>,
    download_status: Option<i32>,
    failure_message: String,
    pub downloads: Mutex<Vec<(String, DownloadOptions)>>,
}

impl ScriptedProvider {
    pub fn with_formats(formats: Vec<Format>) -> Self {
        Self {
            formats: Some(formats),
            download_status: None,
            failure_message: String::new(),
            downloads: Mutex::new(Vec::new()),
        }
    }

    pub fn with_status(status: i32) -> Self {
        Self {
            formats: None,
            download_status: Some(status),
            failure_message: String::new(),
            downloads: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            formats: None,
            download_status: None,
            failure_message: message.to_string(),
            downloads: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded(&self) -> Vec<(String, DownloadOptions)> {
        self.downloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaProvider for ScriptedProvider {
    fn id(&self) -> &'static str {
        "scripted"
    }

    async fn extract_info(&self, url: &str) -> Result<MediaInfo, ProviderFailure> {
        match &self.formats {
            Some(formats) => Ok(MediaInfo {
                id: "scripted".to_string(),
                title: "Scripted".to_string(),
                webpage_url: Some(url.to_string()),
                formats: formats.clone(),
                ..Default::default()
            }),
            None => Err(ProviderFailure::Extraction(self.failure_message.clone())),
        }
    }

    async fn download(&self, url: &str, options: &DownloadOptions) -> Result<i32, ProviderFailure> {
        self.downloads
            .lock()
            .unwrap()
            .push((url.to_string(), options.clone()));
        match self.download_status {
            Some(status) => Ok(status),
            None => Err(ProviderFailure::Extraction(self.failure_message.clone())),
        }
    }
}

pub fn video(id: &str, height: u32, filesize: Option<u64>) -> Format {
    Format {
        format_id: id.to_string(),
        ext: "mp4".to_string(),
        vcodec: Some("avc1.640028".to_string()),
        acodec: Some("none".to_string()),
        height: Some(height),
        filesize,
        ..Default::default()
    }
}

pub fn audio(id: &str, tbr: f64, filesize: Option<u64>) -> Format {
    Format {
        format_id: id.to_string(),
        ext: "m4a".to_string(),
        vcodec: Some("none".to_string()),
        acodec: Some("mp4a.40.2".to_string()),
        tbr: Bitrate::from_f64(tbr),
        filesize,
        ..Default::default()
    }
}
