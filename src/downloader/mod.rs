//! Download fetchers

pub mod fetcher;
pub mod request;

// Re-export for convenience
pub use fetcher::{
    ContentFetcher, FetchOutcome, GenericFetcher, CONTENT_FAILURE, CONTENT_SUCCESS,
    GENERIC_FAILURE, GENERIC_SUCCESS,
};
pub use request::{DownloadRequest, FormatChoice, MediaKind, BEST_AVAILABLE, TITLE_TEMPLATE};
