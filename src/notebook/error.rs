//! Notebook error types.

use std::path::PathBuf;
use thiserror::Error;

/// Notebook-related errors
#[derive(Debug, Error)]
pub enum NotebookError {
    #[error("notebook not found: {0}")]
    NotFound(PathBuf),

    #[error("IO error when accessing `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    // Covers invalid JSON and a non-mapping top level alike; the decoder's
    // message is surfaced as the source, not translated
    #[error("invalid notebook JSON in `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),
}
