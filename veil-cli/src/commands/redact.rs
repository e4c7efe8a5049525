use std::fs;
use std::path::Path;

use anyhow::Result;
use veil_engine::redact;
use veil_storage::load_inventory;

use super::{markdown_files, prepare_destination};

/// Redact every `.md` file under `src_dir` into the same relative layout
/// under `dst_dir`. Files that are not markdown are not copied.
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

    let mut total = 0;
    for path in &files {
        let text = fs::read_to_string(path)?;
        let out = redact(&text, &inventory)?;

        let rel = path.strip_prefix(src_dir)?;
        let target = dst_dir.join(rel);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, &out.text)?;

        println!("Redacted {} (+{} matches)", rel.display(), out.matches.len());
        total += out.matches.len();
    }

    println!("Done. Total matches: {total}");
    Ok(())
}
