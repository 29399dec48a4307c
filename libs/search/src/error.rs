//! Error types for the search engine
//!
//! Query evaluation itself is infallible: malformed filter values degrade to
//! dropped constraints. Errors surface only from the strict saved-search
//! entry point, for callers that want to reject a blob instead of silently
//! replaying it as an unfiltered search.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Saved search blob error: {0}")]
    SavedSearch(String),

    #[error("Saved search JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
