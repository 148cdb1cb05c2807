//! streamgrab library
//!
//! Thin glue over yt-dlp: list the best stream per resolution and bitrate
//! for a URL, and download a chosen or best-available stream.

pub mod downloader;
pub mod extractor;
pub mod selector;
pub mod utils;

// Re-export main types for easier use
pub use downloader::{ContentFetcher, DownloadRequest, FetchOutcome, GenericFetcher, MediaKind};
pub use extractor::{DownloadOptions, Format, MediaInfo, MediaProvider, YtDlpExtractor};
pub use selector::{BestStreamTable, StreamEnumerator, StreamOption, StreamSummary, Variant};
pub use utils::{AppSettings, ProviderFailure};
