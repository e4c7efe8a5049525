//! Inventory persistence errors.

use std::path::PathBuf;

/// Errors raised while loading or saving the inventory file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed inventory in {path}: {message}")]
    Malformed { path: PathBuf, message: String },

    #[error("inventory serialization failed: {message}")]
    Serialize { message: String },
}
