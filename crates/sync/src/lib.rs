//! Feed-to-bookmark synchronization core.
//!
//! One run fetches the configured feeds, forwards their newest entries to the
//! bookmark store tagged by originating feed, then prunes stored items
//! according to the configured retention policy. Runs are sequential and
//! short-lived; an external scheduler provides periodicity.

mod config;
mod error;
mod models;
mod reconciler;
mod retention;
mod source;
mod store;
pub mod tag;

pub use config::{default_feeds, Config, Credentials, FeedSpec, RetentionPolicy};
pub use error::ConfigError;
pub use models::Article;
pub use reconciler::{Reconciler, SyncStats};
pub use source::FeedSource;
pub use store::{BookmarkStore, StoredItem};
