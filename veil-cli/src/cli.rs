use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "veil")]
#[command(about = "Reversible redaction for markdown trees", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Inventory file path (overrides VEIL_INVENTORY and veil.toml)
    #[arg(long, global = true)]
    pub inventory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an empty inventory file
    Init,

    /// Import badge lines into the inventory
    ImportBadges {
        /// Text file with one badge per line
        badges: PathBuf,
    },

    /// List inventory items sorted by code and surface
    List,

    /// Redact .md files from SRC_DIR into DST_DIR
    Redact {
        src_dir: PathBuf,
        dst_dir: PathBuf,

        /// Overwrite an existing destination directory
        #[arg(long)]
        overwrite: bool,
    },

    /// Restore redacted .md files from SRC_DIR into DST_DIR
    Unredact {
        src_dir: PathBuf,
        dst_dir: PathBuf,

        /// Overwrite an existing destination directory
        #[arg(long)]
        overwrite: bool,
    },
}
