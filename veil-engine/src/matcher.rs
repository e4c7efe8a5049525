//! Multi-pattern surface matching.
//!
//! Every canonical surface and alias in the inventory becomes one pattern
//! in a single Aho-Corasick automaton, so a scan pass costs one traversal
//! of the text regardless of inventory size.

use aho_corasick::AhoCorasick;
use veil_core::errors::EngineError;
use veil_core::Inventory;

/// Which registered surface of an item produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Canonical,
    Alias(u64),
}

impl std::fmt::Display for Variant {
    /// The variant marker as it appears inside a tag: `c` or `aN`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Canonical => f.write_str("c"),
            Variant::Alias(alias_id) => write!(f, "a{alias_id}"),
        }
    }
}

/// One occurrence of a registered surface. Offsets are byte offsets into
/// the scanned chunk; `end` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub end: usize,
    pub item_id: u64,
    pub code: String,
    pub desc: String,
    pub surface: String,
    pub variant: Variant,
}

/// Tag payload attached to one automaton pattern.
#[derive(Debug, Clone)]
struct TagPattern {
    surface: String,
    item_id: u64,
    code: String,
    desc: String,
    variant: Variant,
}

/// An automaton over every registered surface, with the payloads needed to
/// render a tag for each hit.
pub struct SurfaceMatcher {
    automaton: AhoCorasick,
    patterns: Vec<TagPattern>,
}

impl SurfaceMatcher {
    /// Flatten the inventory into patterns and build the automaton.
    /// Canonical surfaces are inserted before the aliases of the same item,
    /// in inventory order. Empty surfaces are skipped so they can never
    /// match at every position.
    pub fn build(inventory: &Inventory) -> Result<Self, EngineError> {
        let mut patterns = Vec::new();
        for item in inventory.items() {
            if !item.surface.is_empty() {
                patterns.push(TagPattern {
                    surface: item.surface.clone(),
                    item_id: item.id,
                    code: item.code.clone(),
                    desc: item.desc.clone(),
                    variant: Variant::Canonical,
                });
            }
            for alias in &item.aliases {
                if alias.surface.is_empty() {
                    continue;
                }
                patterns.push(TagPattern {
                    surface: alias.surface.clone(),
                    item_id: item.id,
                    code: item.code.clone(),
                    desc: item.desc.clone(),
                    variant: Variant::Alias(alias.id),
                });
            }
        }

        let automaton = AhoCorasick::new(patterns.iter().map(|p| p.surface.as_bytes()))
            .map_err(|e| EngineError::Automaton {
                message: e.to_string(),
            })?;
        Ok(Self { automaton, patterns })
    }

    /// True when the inventory contributed no patterns at all.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Every occurrence of every pattern in `text`, overlapping and nested
    /// occurrences included. The resolver decides which ones survive.
    pub fn find_all(&self, text: &str) -> Vec<Match> {
        self.automaton
            .find_overlapping_iter(text)
            .map(|m| {
                let pattern = &self.patterns[m.pattern().as_usize()];
                Match {
                    start: m.start(),
                    end: m.end(),
                    item_id: pattern.item_id,
                    code: pattern.code.clone(),
                    desc: pattern.desc.clone(),
                    surface: pattern.surface.clone(),
                    variant: pattern.variant,
                }
            })
            .collect()
    }
}
