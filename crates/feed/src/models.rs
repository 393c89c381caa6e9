/// A single entry of a fetched feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    /// Entry headline. Empty when the feed omits a title.
    pub title: String,
    /// Link to the full article.
    pub link: String,
}
