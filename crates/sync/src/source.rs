use async_trait::async_trait;
use feed::{FeedClient, FeedEntry, FeedError};

/// Feed source seam.
///
/// The reconciler only needs "give me the entries for this URL"; the concrete
/// transport lives behind this trait so tests can substitute canned feeds.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the entries of one feed, most-recent-first.
    async fn fetch(&self, url: &str) -> Result<Vec<FeedEntry>, FeedError>;
}

#[async_trait]
impl FeedSource for FeedClient {
    async fn fetch(&self, url: &str) -> Result<Vec<FeedEntry>, FeedError> {
        FeedClient::fetch(self, url).await
    }
}
