use thiserror::Error;

#[derive(Debug, Error)]
pub enum PocketError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Pocket API error: {status_code} - {message}")]
    Api { status_code: u16, message: String },
}
