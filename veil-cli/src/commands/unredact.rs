use std::fs;
use std::path::Path;

use anyhow::Result;
use veil_engine::unredact;
use veil_storage::load_inventory;

use super::{markdown_files, prepare_destination};

/// Restore every `.md` file under `src_dir` into the same relative layout
/// under `dst_dir`, replacing known tags with their original surfaces.
pub fn handle(
    src_dir: &Path,
    dst_dir: &Path,
    inventory_path: &Path,
    overwrite: bool,
) -> Result<()> {
    prepare_destination(src_dir, dst_dir, overwrite)?;

    let inventory = load_inventory(inventory_path)?;
    let files = markdown_files(src_dir);
    if files.is_empty() {
        println!("No .md files found.");
        return Ok(());
    }

    for path in &files {
        let text = fs::read_to_string(path)?;
        let restored = unredact(&text, &inventory);

        let rel = path.strip_prefix(src_dir)?;
        let target = dst_dir.join(rel);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, restored)?;

        println!("Unredacted {}", rel.display());
    }

    println!(
        "Done. Processed {} files into '{}'.",
        files.len(),
        dst_dir.display()
    );
    Ok(())
}
