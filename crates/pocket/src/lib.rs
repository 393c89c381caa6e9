//! Pocket v3 API client library.
//!
//! This crate provides a client for the batched add/get/delete surface of the
//! Pocket API. All mutations go through the `/v3/send` action endpoint so a
//! whole batch costs a single HTTP call.
//!
//! # Example
//!
//! ```rust,ignore
//! use pocket::{NewItem, PocketClient};
//!
//! let client = PocketClient::new(reqwest::Client::new(), "CONSUMER_KEY", "ACCESS_TOKEN");
//! let saved = client
//!     .add(&[NewItem {
//!         url: "https://example.org/article".into(),
//!         title: "An article".into(),
//!         tags: "example.org".into(),
//!     }])
//!     .await?;
//! ```

mod client;
mod error;
mod items;
pub mod models;

pub use client::PocketClient;
pub use error::PocketError;
pub use models::{Item, NewItem};

pub type Result<T> = std::result::Result<T, PocketError>;
