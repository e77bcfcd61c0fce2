//! Tilesnap Settings Crate
//!
//! Typed configuration for the interaction constants and the layout
//! storage location, with JSON/TOML file I/O and validation.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, default_data_dir, Config, InteractionSettings, StorageSettings,
};
pub use error::{SettingsError, SettingsResult};
