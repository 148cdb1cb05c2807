//! Stream selection: classify provider formats, keep the largest stream per
//! resolution / bitrate, and render the result

pub mod enumerator;
pub mod summary;
pub mod table;
pub mod variant;

pub use enumerator::{StreamEnumerator, ERROR_PREFIX};
pub use summary::{StreamOption, StreamSummary};
pub use table::{BestEntry, BestStreamTable};
pub use variant::{classify_all, Variant};
