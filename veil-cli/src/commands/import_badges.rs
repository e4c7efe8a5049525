use std::fs;
use std::path::Path;

use anyhow::{bail, Result};
use veil_core::parse_badges;
use veil_storage::{load_inventory, save_inventory};

/// Parse a badge file and merge every badge into the inventory.
///
/// The reported count is the number of parsed badges, merges with
/// existing items included, so reruns over the same file report the same
/// number instead of dropping to zero.
pub fn handle(badges_path: &Path, inventory_path: &Path) -> Result<()> {
    if !badges_path.is_file() {
        bail!("badge file not found: {}", badges_path.display());
    }
    let raw = fs::read_to_string(badges_path)?;
    let badges = parse_badges(&raw)?;

    let mut inventory = load_inventory(inventory_path)?;
    for badge in &badges {
        inventory.add_or_merge(&badge.code, &badge.desc, &badge.surface)?;
    }
    save_inventory(&inventory, inventory_path)?;

    println!(
        "✓ Imported {} badges into '{}'",
        badges.len(),
        inventory_path.display()
    );
    Ok(())
}
