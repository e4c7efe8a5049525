//! # veil-core
//!
//! Foundation crate for the Veil redaction engine.
//! Defines the inventory data model, the shared grammars, badge parsing,
//! and all error types. Every other crate in the workspace depends on this.

pub mod badges;
pub mod errors;
pub mod grammar;
pub mod inventory;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use badges::{parse_badges, Badge};
pub use errors::{VeilError, VeilResult};
pub use inventory::Inventory;
pub use models::{Alias, RedactionItem, Scope};
