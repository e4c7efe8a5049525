//! Loading and saving the inventory file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;
use veil_core::errors::StoreError;
use veil_core::{Inventory, VeilResult};

/// Load the inventory at `path`.
///
/// A missing file is a valid empty inventory, not an error, so a fresh
/// working directory works without an init step. Unreadable JSON or
/// content failing model validation is reported as malformed together
/// with the offending path. The derived id index is rebuilt before the
/// inventory is handed out.
pub fn load_inventory(path: &Path) -> VeilResult<Inventory> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no inventory file, starting empty");
            return Ok(Inventory::new());
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            }
            .into())
        }
    };

    let mut inventory: Inventory =
        serde_json::from_str(&raw).map_err(|e| StoreError::Malformed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    inventory.validate().map_err(|e| StoreError::Malformed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    inventory.rebuild_index();

    debug!(path = %path.display(), items = inventory.items().len(), "inventory loaded");
    Ok(inventory)
}

/// Write `inventory` to `path` as pretty-printed JSON, creating parent
/// directories as needed. The write replaces the whole file.
pub fn save_inventory(inventory: &Inventory, path: &Path) -> VeilResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let json = serde_json::to_string_pretty(inventory).map_err(|e| StoreError::Serialize {
        message: e.to_string(),
    })?;
    fs::write(path, json).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), items = inventory.items().len(), "inventory saved");
    Ok(())
}
