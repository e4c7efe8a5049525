use std::path::Path;

use anyhow::Result;
use veil_core::Inventory;
use veil_storage::save_inventory;

/// Create an empty inventory file. An existing file is reported and left
/// untouched; init never clobbers data.
pub fn handle(inventory_path: &Path) -> Result<()> {
    if inventory_path.exists() {
        println!(
            "Inventory '{}' already exists, leaving it untouched.",
            inventory_path.display()
        );
        return Ok(());
    }

    save_inventory(&Inventory::new(), inventory_path)?;
    println!("✓ Created new inventory at '{}'", inventory_path.display());
    Ok(())
}
