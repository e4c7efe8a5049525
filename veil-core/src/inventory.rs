//! The redaction inventory: an ordered item list plus a derived id index.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::errors::{InventoryError, VeilResult};
use crate::grammar::CODE_RE;
use crate::models::{Alias, RedactionItem};

/// In-memory inventory of redaction items.
///
/// The item list is authoritative and append-only. The id index is derived
/// state: rebuilt after deserialization, kept consistent on every mutation,
/// never persisted. All mutation flows through
/// [`add_or_merge`](Self::add_or_merge) and [`add_alias`](Self::add_alias),
/// the sole enforcement points for the uniqueness invariants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<RedactionItem>,
    #[serde(skip)]
    by_id: FxHashMap<u64, usize>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// All items, in insertion order.
    pub fn items(&self) -> &[RedactionItem] {
        &self.items
    }

    /// Next free item id: `max(existing ids) + 1`, starting at 1.
    pub fn next_id(&self) -> u64 {
        self.items.iter().map(|item| item.id).max().unwrap_or(0) + 1
    }

    /// Look up an item by id. Absence is not an error.
    pub fn find(&self, item_id: u64) -> Option<&RedactionItem> {
        self.by_id.get(&item_id).map(|&idx| &self.items[idx])
    }

    fn find_mut(&mut self, item_id: u64) -> Option<&mut RedactionItem> {
        let idx = self.by_id.get(&item_id).copied()?;
        self.items.get_mut(idx)
    }

    /// Recompute the id index from the item list. Must be called after
    /// deserializing, since the index is not part of the persisted form.
    pub fn rebuild_index(&mut self) {
        self.by_id = self
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| (item.id, idx))
            .collect();
    }

    fn register(&mut self, item: RedactionItem) {
        self.by_id.insert(item.id, self.items.len());
        self.items.push(item);
    }

    /// Add a new item, or return the existing one when `(code, surface)`
    /// already exists, or when an item with the same `(code, desc)` already
    /// carries the surface as an alias. Idempotent under repeated input;
    /// two items can never end up sharing a `(code, surface)` pair.
    pub fn add_or_merge(
        &mut self,
        code: &str,
        desc: &str,
        surface: &str,
    ) -> VeilResult<&RedactionItem> {
        let norm_surface = surface.trim();

        let merged = self.items.iter().position(|item| {
            (item.code == code && item.surface == norm_surface)
                || (item.code == code
                    && item.desc == desc
                    && item.aliases.iter().any(|alias| alias.surface == norm_surface))
        });
        if let Some(idx) = merged {
            return Ok(&self.items[idx]);
        }

        let idx = self.items.len();
        let item = RedactionItem::new(self.next_id(), code, desc, norm_surface)?;
        self.register(item);
        Ok(&self.items[idx])
    }

    /// Register an alternate surface for an existing item, returning the
    /// new alias id. Returns `Ok(0)` without change when the trimmed
    /// surface equals the canonical surface or an existing alias.
    pub fn add_alias(&mut self, item_id: u64, alias_surface: &str) -> VeilResult<u64> {
        let item = self
            .find_mut(item_id)
            .ok_or(InventoryError::ItemNotFound { item_id })?;

        let trimmed = alias_surface.trim();
        if trimmed.is_empty() {
            return Err(InventoryError::EmptyAliasSurface.into());
        }

        if item.surface == trimmed || item.aliases.iter().any(|alias| alias.surface == trimmed) {
            return Ok(0);
        }

        let alias_id = item.aliases.iter().map(|alias| alias.id).max().unwrap_or(0) + 1;
        item.aliases.push(Alias::new(alias_id, trimmed)?);
        Ok(alias_id)
    }

    /// Resolve an alias surface. `None` on unknown item or alias id; the
    /// caller decides the fallback.
    pub fn get_alias_surface(&self, item_id: u64, alias_id: u64) -> Option<&str> {
        self.find(item_id)?
            .aliases
            .iter()
            .find(|alias| alias.id == alias_id)
            .map(|alias| alias.surface.as_str())
    }

    /// Check the invariants serde cannot enforce: valid classification
    /// codes, non-empty surfaces, unique item ids, unique alias ids per
    /// item. Used by the store after deserialization.
    pub fn validate(&self) -> Result<(), InventoryError> {
        let mut item_ids = FxHashSet::default();
        for item in &self.items {
            if !CODE_RE.is_match(&item.code) {
                return Err(InventoryError::InvalidCode {
                    code: item.code.clone(),
                });
            }
            if item.surface.trim().is_empty() {
                return Err(InventoryError::EmptySurface);
            }
            if !item_ids.insert(item.id) {
                return Err(InventoryError::DuplicateId { item_id: item.id });
            }
            let mut alias_ids = FxHashSet::default();
            for alias in &item.aliases {
                if alias.surface.trim().is_empty() {
                    return Err(InventoryError::EmptyAliasSurface);
                }
                if !alias_ids.insert(alias.id) {
                    return Err(InventoryError::DuplicateAliasId {
                        item_id: item.id,
                        alias_id: alias.id,
                    });
                }
            }
        }
        Ok(())
    }
}
