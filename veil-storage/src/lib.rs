//! # veil-storage
//!
//! Persistence for the redaction inventory: one pretty-printed JSON file,
//! loaded with model validation and saved whole.

pub mod store;

pub use store::{load_inventory, save_inventory};
