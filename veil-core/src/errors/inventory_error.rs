//! Inventory validation and lookup errors.

/// Errors raised by inventory construction, mutation, and load validation.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("invalid classification code: {code}")]
    InvalidCode { code: String },

    #[error("surface cannot be empty or whitespace")]
    EmptySurface,

    #[error("alias surface cannot be empty or whitespace")]
    EmptyAliasSurface,

    #[error("redaction item {item_id} not found")]
    ItemNotFound { item_id: u64 },

    #[error("duplicate item id {item_id}")]
    DuplicateId { item_id: u64 },

    #[error("duplicate alias id {alias_id} on item {item_id}")]
    DuplicateAliasId { item_id: u64, alias_id: u64 },
}
