//! CLI configuration with layered resolution.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;
use tracing::debug;
use veil_core::errors::ConfigError;

const CONFIG_FILE: &str = "veil.toml";
const INVENTORY_ENV: &str = "VEIL_INVENTORY";
const DEFAULT_INVENTORY: &str = "./veil.inventory.json";

/// Settings readable from `veil.toml` in the working directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VeilConfig {
    pub inventory_path: PathBuf,
}

impl Default for VeilConfig {
    fn default() -> Self {
        Self {
            inventory_path: PathBuf::from(DEFAULT_INVENTORY),
        }
    }
}

impl VeilConfig {
    /// Load `veil.toml` from `root`. A missing file yields the compiled
    /// defaults; an unreadable or unparseable file is an error.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(ConfigError::Io { path, source }),
        };
        toml::from_str(&raw).map_err(|e| ConfigError::Parse {
            path,
            message: e.to_string(),
        })
    }
}

/// Resolve the inventory path.
///
/// Resolution order (highest priority first):
/// 1. `--inventory` flag
/// 2. `VEIL_INVENTORY` environment variable
/// 3. `veil.toml` in the working directory
/// 4. Compiled default (`./veil.inventory.json`)
pub fn resolve_inventory_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }
    if let Ok(value) = env::var(INVENTORY_ENV) {
        if !value.is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    let config = VeilConfig::load(Path::new("."))?;
    debug!(path = %config.inventory_path.display(), "inventory path resolved from config");
    Ok(config.inventory_path)
}
