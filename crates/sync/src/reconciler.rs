use chrono::{Duration, Utc};

use crate::config::{Config, RetentionPolicy};
use crate::models::Article;
use crate::retention;
use crate::source::FeedSource;
use crate::store::BookmarkStore;
use crate::tag;

/// Page bound for the retention read; well above any realistic item count.
const GET_PAGE_SIZE: usize = 2000;
/// Maximum ids per delete request.
const DELETE_BATCH_SIZE: usize = 100;

/// Outcome counters for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncStats {
    pub articles_saved: usize,
    pub items_deleted: usize,
}

/// One reconciliation run: fetch, tag and save the new articles, then prune.
///
/// Stage failures are isolated: a feed that fails to fetch is skipped, a
/// failed save still lets retention run, and a failed retention read only
/// aborts the retention stage. Only configuration problems are fatal, and
/// those are caught before the reconciler is built.
pub struct Reconciler<S, B> {
    config: Config,
    source: S,
    store: B,
}

impl<S: FeedSource, B: BookmarkStore> Reconciler<S, B> {
    pub fn new(config: Config, source: S, store: B) -> Self {
        Self {
            config,
            source,
            store,
        }
    }

    /// Run the full pass and return its outcome counters.
    pub async fn run(&self) -> SyncStats {
        let articles = self.fetch_articles().await;
        let articles_saved = self.save(&articles).await;

        let items_deleted = match &self.config.policy {
            RetentionPolicy::PerFeedLimit => self.enforce_limits().await,
            RetentionPolicy::MaxAge(max_age) => self.enforce_age(*max_age).await,
        };

        SyncStats {
            articles_saved,
            items_deleted,
        }
    }

    /// Fetch every configured feed sequentially, capping each at its limit.
    ///
    /// The cap bounds both "new" and "retained" counts, so entries beyond it
    /// are ignored even on a first run.
    async fn fetch_articles(&self) -> Vec<Article> {
        let mut articles = Vec::new();

        for spec in &self.config.feeds {
            let entries = match self.source.fetch(&spec.url).await {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!("[{}] feed fetch failed: {}", spec.url, e);
                    continue;
                }
            };

            if entries.is_empty() {
                tracing::debug!("[{}] feed returned no entries, skipping", spec.url);
                continue;
            }

            let feed_tag = tag::derive(&spec.url);
            articles.extend(entries.into_iter().take(spec.limit).map(|entry| Article {
                url: entry.link,
                title: entry.title,
                tag: feed_tag.clone(),
            }));
        }

        articles
    }

    /// Submit all articles of this run as one batched add.
    async fn save(&self, articles: &[Article]) -> usize {
        if articles.is_empty() {
            tracing::debug!("no new articles this run");
            return 0;
        }

        match self.store.add_batch(articles).await {
            Ok(saved) => {
                tracing::info!("saved {} of {} articles", saved, articles.len());
                saved
            }
            Err(e) => {
                tracing::error!("failed to save articles: {}", e);
                0
            }
        }
    }

    /// Variant A: keep the newest `limit` items per configured feed.
    async fn enforce_limits(&self) -> usize {
        let items = match self.store.get_all(GET_PAGE_SIZE).await {
            Ok(items) => items,
            Err(e) => {
                tracing::error!("failed to fetch stored items: {}", e);
                return 0;
            }
        };

        let stale = retention::select_over_limit(&self.config.feeds, &items);
        self.delete_in_batches(stale).await
    }

    /// Variant B: global sweep of items older than `max_age`.
    async fn enforce_age(&self, max_age: Duration) -> usize {
        let items = match self.store.get_all(GET_PAGE_SIZE).await {
            Ok(items) => items,
            Err(e) => {
                tracing::error!("failed to fetch stored items: {}", e);
                return 0;
            }
        };

        let expired = retention::select_expired(&items, max_age, Utc::now());
        self.delete_in_batches(expired).await
    }

    /// Issue deletions in bounded batches; a failed batch is logged and does
    /// not block the remaining ones.
    async fn delete_in_batches(&self, ids: Vec<String>) -> usize {
        if ids.is_empty() {
            tracing::debug!("no stale items to delete");
            return 0;
        }

        let mut deleted = 0;
        for batch in ids.chunks(DELETE_BATCH_SIZE) {
            match self.store.delete_batch(batch).await {
                Ok(()) => deleted += batch.len(),
                Err(e) => {
                    tracing::error!("failed to delete batch of {}: {}", batch.len(), e);
                }
            }
        }

        tracing::info!("deleted {} stale items", deleted);
        deleted
    }
}
