use reqwest::Client;

use crate::error::FeedError;
use crate::models::FeedEntry;
use crate::parser::parse_feed;

/// RSS/Atom feed fetcher client
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    /// Create a new FeedClient with a shared reqwest Client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetch and parse a feed document
    ///
    /// # Arguments
    /// * `url` - The feed URL to fetch
    ///
    /// # Returns
    /// The feed's entries in document order (most-recent-first as published)
    pub async fn fetch(&self, url: &str) -> crate::Result<Vec<FeedEntry>> {
        tracing::debug!("Fetching feed from: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        let entries = parse_feed(&bytes)?;

        tracing::debug!("Parsed {} entries from feed", entries.len());
        Ok(entries)
    }
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new()
    }
}
