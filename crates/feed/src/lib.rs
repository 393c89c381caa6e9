mod client;
mod error;
pub mod models;
mod parser;

pub use client::FeedClient;
pub use error::FeedError;
pub use models::FeedEntry;

pub type Result<T> = std::result::Result<T, FeedError>;
