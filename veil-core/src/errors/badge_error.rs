//! Badge ingestion errors.

/// Errors raised while parsing badge lines. Parsing is fail-fast: the
/// first bad line aborts the whole file.
#[derive(Debug, thiserror::Error)]
pub enum BadgeError {
    #[error("invalid badge line {line}: {content}")]
    InvalidLine { line: usize, content: String },
}
