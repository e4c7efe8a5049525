use std::path::Path;

use anyhow::Result;
use veil_storage::load_inventory;

/// Print all inventory items, sorted by code then surface.
pub fn handle(inventory_path: &Path) -> Result<()> {
    let inventory = load_inventory(inventory_path)?;
    if inventory.items().is_empty() {
        println!("Inventory '{}' is empty.", inventory_path.display());
        return Ok(());
    }

    let mut items: Vec<_> = inventory.items().iter().collect();
    items.sort_by(|a, b| a.code.cmp(&b.code).then_with(|| a.surface.cmp(&b.surface)));

    for item in items {
        println!(
            "- #{} {}: {} ({})",
            item.id, item.code, item.desc, item.surface
        );
        for alias in &item.aliases {
            println!("    alias a{}: {}", alias.id, alias.surface);
        }
    }
    Ok(())
}
