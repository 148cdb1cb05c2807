pub mod models;
pub mod traits;
pub mod ytdlp;

pub use models::{Bitrate, DownloadOptions, Format, MediaInfo};
pub use traits::MediaProvider;
pub use ytdlp::YtDlpExtractor;
