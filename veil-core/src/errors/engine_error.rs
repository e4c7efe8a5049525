//! Redaction engine errors.

/// Errors raised by the matching engine. Automaton construction cannot
/// fail for inventories that satisfy the model invariants; the variant
/// exists so the failure is reported instead of panicking.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("pattern automaton construction failed: {message}")]
    Automaton { message: String },
}
