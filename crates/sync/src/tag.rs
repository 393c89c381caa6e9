//! Feed tag derivation.
//!
//! Stored items are partitioned by a tag derived from the feed URL, so the
//! same feed maps to the same tag on every run without any persisted state.
//! Collisions between configured feeds are a configuration error, not
//! something handled at runtime.

/// Derive the stable tag for a feed identifier.
///
/// Strips the scheme and an optional `www.` prefix, trims surrounding
/// slashes and replaces the remaining path separators with `-`:
///
/// `https://www.theatlantic.com/feed/all/` becomes `theatlantic.com-feed-all`
pub fn derive(identifier: &str) -> String {
    let stripped = identifier
        .strip_prefix("https://")
        .or_else(|| identifier.strip_prefix("http://"))
        .unwrap_or(identifier);
    let stripped = stripped.strip_prefix("www.").unwrap_or(stripped);
    stripped.trim_matches('/').replace('/', "-")
}
