/// An article produced from one feed entry during a run.
///
/// Ephemeral: articles exist only between the fetch and save stages and are
/// never persisted locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub url: String,
    pub title: String,
    /// Tag of the originating feed, see [`crate::tag::derive`].
    pub tag: String,
}
