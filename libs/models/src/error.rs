//! Error types for catalog ingestion

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog feed error: {0}")]
    Feed(String),

    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
