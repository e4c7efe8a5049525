pub mod import_badges;
pub mod init;
pub mod list;
pub mod redact;
pub mod unredact;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use walkdir::WalkDir;

/// Collect every `.md` file under `root`, in a deterministic order.
pub fn markdown_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().map_or(false, |ext| ext == "md"))
        .map(|e| e.into_path())
        .collect()
}

/// Shared guards for the tree-rewriting commands: the source must be a
/// directory, and an existing destination is only replaced with
/// `--overwrite`.
pub fn prepare_destination(src_dir: &Path, dst_dir: &Path, overwrite: bool) -> Result<()> {
    if !src_dir.is_dir() {
        bail!("not a directory: {}", src_dir.display());
    }
    if dst_dir.exists() && !overwrite {
        bail!(
            "destination exists: {} (use --overwrite)",
            dst_dir.display()
        );
    }
    fs::create_dir_all(dst_dir)?;
    Ok(())
}
