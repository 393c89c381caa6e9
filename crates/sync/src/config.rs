use std::env;

use chrono::Duration;

use crate::error::ConfigError;

/// Environment variable holding the Pocket application key.
const CONSUMER_KEY_VAR: &str = "POCKET_CONSUMER_KEY";
/// Environment variable holding the per-user Pocket token.
const ACCESS_TOKEN_VAR: &str = "POCKET_ACCESS_TOKEN";
/// Optional: a positive day count selects age-based retention.
const MAX_AGE_VAR: &str = "RETENTION_MAX_AGE_DAYS";

/// Default number of items fetched and retained per feed.
const DEFAULT_FEED_LIMIT: usize = 20;

/// A configured feed subscription.
#[derive(Debug, Clone)]
pub struct FeedSpec {
    /// Feed URL.
    pub url: String,
    /// Maximum number of items fetched and retained for this feed.
    pub limit: usize,
}

impl FeedSpec {
    pub fn new(url: impl Into<String>, limit: usize) -> Self {
        Self {
            url: url.into(),
            limit,
        }
    }
}

/// Pocket API credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub consumer_key: String,
    pub access_token: String,
}

/// Which stored items are eligible for deletion.
///
/// The variants are alternative designs, never combined: a run enforces
/// exactly one of them, chosen at configuration time.
#[derive(Debug, Clone)]
pub enum RetentionPolicy {
    /// Keep the newest `FeedSpec::limit` items per feed tag.
    PerFeedLimit,
    /// Delete any item older than the given duration, regardless of tag.
    MaxAge(Duration),
}

/// Immutable run configuration: built once per run, never mutated.
#[derive(Debug, Clone)]
pub struct Config {
    pub feeds: Vec<FeedSpec>,
    pub policy: RetentionPolicy,
    pub credentials: Credentials,
}

impl Config {
    /// Assemble the configuration from the environment.
    ///
    /// Credentials are required and validated here, before any network call.
    /// Retention defaults to the per-feed limit policy unless
    /// `RETENTION_MAX_AGE_DAYS` selects the age sweep.
    pub fn from_env() -> Result<Self, ConfigError> {
        let consumer_key = require_env(CONSUMER_KEY_VAR)?;
        let access_token = require_env(ACCESS_TOKEN_VAR)?;

        let policy = match env::var(MAX_AGE_VAR) {
            Ok(raw) => {
                let days: i64 = raw.parse().map_err(|_| ConfigError::Invalid {
                    name: MAX_AGE_VAR,
                    value: raw.clone(),
                })?;
                if days <= 0 {
                    return Err(ConfigError::Invalid {
                        name: MAX_AGE_VAR,
                        value: raw,
                    });
                }
                RetentionPolicy::MaxAge(Duration::days(days))
            }
            Err(_) => RetentionPolicy::PerFeedLimit,
        };

        Ok(Self {
            feeds: default_feeds(),
            policy,
            credentials: Credentials {
                consumer_key,
                access_token,
            },
        })
    }
}

fn require_env(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingEnv(name))
}

/// The subscribed feeds. Fixed at build time; there is no runtime feed
/// management surface.
pub fn default_feeds() -> Vec<FeedSpec> {
    vec![
        FeedSpec::new("https://www.theatlantic.com/feed/all/", DEFAULT_FEED_LIMIT),
        FeedSpec::new("http://plato.stanford.edu/rss/sep.xml", DEFAULT_FEED_LIMIT),
    ]
}
