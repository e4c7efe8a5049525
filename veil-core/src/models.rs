//! Data model for the redaction inventory.

use serde::{Deserialize, Serialize};

use crate::errors::InventoryError;
use crate::grammar::CODE_RE;

/// An alternate surface mapping back to its parent item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    pub id: u64,
    pub surface: String,
}

impl Alias {
    /// Build an alias with a trimmed, non-empty surface.
    pub fn new(id: u64, surface: &str) -> Result<Self, InventoryError> {
        let surface = surface.trim();
        if surface.is_empty() {
            return Err(InventoryError::EmptyAliasSurface);
        }
        Ok(Self {
            id,
            surface: surface.to_string(),
        })
    }
}

/// Declared applicability of a redaction item. Carried in the data model;
/// the core algorithms do not differentiate on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    #[default]
    Global,
    FileLocal,
}

/// A single logical redaction unit.
///
/// - `code`: classification code, e.g. `(1)(A)(c)`
/// - `desc`: human-readable reason for the redaction, e.g. `email address`
/// - `surface`: canonical match text, restored on unredact
/// - `aliases`: alternate match texts mapping back to this item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionItem {
    pub id: u64,
    pub code: String,
    pub desc: String,
    pub surface: String,
    #[serde(default)]
    pub aliases: Vec<Alias>,
    #[serde(default)]
    pub scope: Scope,
}

impl RedactionItem {
    /// Build an item without aliases, validating the classification code
    /// and trimming the surface.
    pub fn new(id: u64, code: &str, desc: &str, surface: &str) -> Result<Self, InventoryError> {
        if !CODE_RE.is_match(code) {
            return Err(InventoryError::InvalidCode {
                code: code.to_string(),
            });
        }
        let surface = surface.trim();
        if surface.is_empty() {
            return Err(InventoryError::EmptySurface);
        }
        Ok(Self {
            id,
            code: code.to_string(),
            desc: desc.to_string(),
            surface: surface.to_string(),
            aliases: Vec::new(),
            scope: Scope::default(),
        })
    }
}
