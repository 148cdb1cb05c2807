//! Stream enumeration against a scripted provider, without touching the network.

mod common;

use common::{audio, video, ScriptedProvider};
use std::sync::Arc;
use streamgrab::extractor::{Bitrate, Format};
use streamgrab::selector::{StreamEnumerator, StreamSummary};

fn enumerator(provider: ScriptedProvider) -> StreamEnumerator {
    StreamEnumerator::new(Arc::new(provider))
}

#[tokio::test]
async fn picks_largest_stream_per_resolution() {
    let provider = ScriptedProvider::with_formats(vec![
        video("A", 1080, Some(0)),
        video("B", 1080, Some(5_000_000)),
        video("C", 720, Some(3_000_000)),
        video("D", 720, Some(1_000_000)),
    ]);

    let summary = enumerator(provider).enumerate("https://example.com/v").await.unwrap();
    let picked: Vec<(&str, &str)> = summary
        .video
        .iter()
        .map(|o| (o.quality.as_str(), o.itag.as_str()))
        .collect();

    assert_eq!(picked, vec![("1080p", "B"), ("720p", "C")]);
}

#[tokio::test]
async fn renders_two_line_summary() {
    let provider = ScriptedProvider::with_formats(vec![
        video("22", 720, Some(5_242_880)),
        video("18", 360, None),
        audio("140", 129.476, Some(3_250_000)),
        audio("139", 48.0, None),
    ]);

    let text = enumerator(provider).summarize("https://example.com/v").await;
    assert_eq!(
        text,
        "Available Resolutions (Video): 720p (itag=22, Size=5.00 MB), 360p (itag=18)\n\
         Available Bitrates (Audio): 129.476 kbps (itag=140, Size=3.10 MB), 48.0 kbps (itag=139)"
    );
}

#[tokio::test]
async fn muxed_stream_is_listed_as_video_only() {
    let muxed = Format {
        format_id: "18".to_string(),
        vcodec: Some("avc1.42001E".to_string()),
        acodec: Some("mp4a.40.2".to_string()),
        height: Some(360),
        tbr: Bitrate::from_f64(600.0),
        filesize: Some(9_000_000),
        ..Default::default()
    };
    let provider = ScriptedProvider::with_formats(vec![muxed]);

    let summary = enumerator(provider).enumerate("https://example.com/v").await.unwrap();
    assert_eq!(summary.video.len(), 1);
    assert!(summary.audio.is_empty());
}

#[tokio::test]
async fn streams_without_key_are_excluded() {
    let mut no_height = video("137", 0, Some(10));
    no_height.height = None;
    let mut no_bitrate = audio("251", 0.0, Some(10));
    no_bitrate.tbr = None;

    let provider = ScriptedProvider::with_formats(vec![no_height, no_bitrate]);
    let text = enumerator(provider).summarize("https://example.com/v").await;

    assert_eq!(text, "Available Resolutions (Video): \nAvailable Bitrates (Audio): ");
}

#[tokio::test]
async fn provider_failure_becomes_error_text() {
    let provider = ScriptedProvider::failing("ERROR: Unsupported URL: https://example.com/nope");
    let text = enumerator(provider).summarize("https://example.com/nope").await;

    assert!(text.starts_with("Error: "));
    assert!(text.contains("Unsupported URL"));
    assert_eq!(StreamSummary::parse(&text), None);
}

#[tokio::test]
async fn provider_failure_is_an_err_in_result_api() {
    let provider = ScriptedProvider::failing("network unreachable");
    let result = enumerator(provider).enumerate("https://example.com/v").await;

    assert_eq!(result.unwrap_err().to_string(), "network unreachable");
}

#[tokio::test]
async fn summary_text_parses_back_to_same_ids() {
    let provider = ScriptedProvider::with_formats(vec![
        video("137", 1080, Some(48_000_000)),
        video("22", 720, None),
        audio("140", 129.476, Some(3_250_000)),
    ]);
    let enumerator = enumerator(provider);

    let summary = enumerator.enumerate("https://example.com/v").await.unwrap();
    let text = enumerator.summarize("https://example.com/v").await;
    let parsed = StreamSummary::parse(&text).unwrap();

    assert_eq!(parsed, summary);
}
