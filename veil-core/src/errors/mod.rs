//! Error handling for Veil.
//! One error enum per subsystem, `thiserror` only; `anyhow` stays in the CLI.

pub mod badge_error;
pub mod config_error;
pub mod engine_error;
pub mod inventory_error;
pub mod store_error;

pub use badge_error::BadgeError;
pub use config_error::ConfigError;
pub use engine_error::EngineError;
pub use inventory_error::InventoryError;
pub use store_error::StoreError;

/// Umbrella error returned by the public APIs across the workspace.
#[derive(Debug, thiserror::Error)]
pub enum VeilError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Badge(#[from] BadgeError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias used by the public APIs.
pub type VeilResult<T> = Result<T, VeilError>;
