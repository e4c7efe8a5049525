//! CLI configuration errors.

use std::path::PathBuf;

/// Errors raised while loading `veil.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },
}
