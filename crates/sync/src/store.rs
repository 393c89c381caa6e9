use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

use pocket::{NewItem, PocketClient, PocketError};

use crate::models::Article;

/// A stored bookmark as seen by the retention stage.
///
/// Implementations convert their native wire models into this unified shape;
/// the opaque store-side id stays on the outside as the key of the `get_all`
/// mapping.
#[derive(Debug, Clone)]
pub struct StoredItem {
    pub tags: HashSet<String>,
    pub added_at: DateTime<Utc>,
}

/// Bookmark store seam: batched add, bulk read, batched delete.
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// Save all articles in one request, returning the accepted count.
    async fn add_batch(&self, articles: &[Article]) -> Result<usize, PocketError>;

    /// Fetch up to `count` stored items, keyed by store-side id.
    async fn get_all(&self, count: usize) -> Result<HashMap<String, StoredItem>, PocketError>;

    /// Delete the given ids in one request. Callers cap the batch size.
    async fn delete_batch(&self, ids: &[String]) -> Result<(), PocketError>;
}

#[async_trait]
impl BookmarkStore for PocketClient {
    async fn add_batch(&self, articles: &[Article]) -> Result<usize, PocketError> {
        let items: Vec<NewItem> = articles
            .iter()
            .map(|article| NewItem {
                url: article.url.clone(),
                title: article.title.clone(),
                tags: article.tag.clone(),
            })
            .collect();
        self.add(&items).await
    }

    async fn get_all(&self, count: usize) -> Result<HashMap<String, StoredItem>, PocketError> {
        let items = self.get(count).await?;
        Ok(items
            .into_iter()
            .map(|(id, item)| {
                (
                    id,
                    StoredItem {
                        tags: item.tags,
                        added_at: item.time_added,
                    },
                )
            })
            .collect())
    }

    async fn delete_batch(&self, ids: &[String]) -> Result<(), PocketError> {
        self.delete(ids).await
    }
}
