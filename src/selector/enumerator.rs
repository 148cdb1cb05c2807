use crate::extractor::traits::MediaProvider;
use crate::selector::summary::StreamSummary;
use crate::selector::table::BestStreamTable;
use crate::selector::variant::classify_all;
use crate::utils::error::ProviderFailure;
use std::sync::Arc;
use tracing::{debug, warn};

/// Prefix of the text returned by [`StreamEnumerator::summarize`] on failure
pub const ERROR_PREFIX: &str = "Error: ";

/// Lists the best stream per video resolution and per audio bitrate for a URL
pub struct StreamEnumerator {
    provider: Arc<dyn MediaProvider>,
}

impl StreamEnumerator {
    pub fn new(provider: Arc<dyn MediaProvider>) -> Self {
        Self { provider }
    }

    /// Fetch the URL's formats and reduce them to the best stream per key
    pub async fn enumerate(&self, url: &str) -> Result<StreamSummary, ProviderFailure> {
        let info = self.provider.extract_info(url).await?;
        let variants = classify_all(&info.formats);
        debug!(
            "{}: {} of {} formats usable for {}",
            self.provider.id(),
            variants.len(),
            info.formats.len(),
            url
        );

        let table = BestStreamTable::from_variants(variants);
        Ok(StreamSummary::from_table(&table))
    }

    /// Same as [`enumerate`](Self::enumerate), but always returns text: the
    /// rendered summary, or `"Error: <message>"` when the provider fails.
    pub async fn summarize(&self, url: &str) -> String {
        match self.enumerate(url).await {
            Ok(summary) => summary.to_string(),
            Err(e) => {
                warn!("Stream enumeration failed for {}: {}", url, e);
                format!("{}{}", ERROR_PREFIX, e)
            }
        }
    }
}
