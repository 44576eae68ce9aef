//! Error types for the search client

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Search client errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Engine error: status {status}: {body}")]
    Engine { status: u16, body: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
