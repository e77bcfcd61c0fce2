//! Configuration types and file I/O.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{SettingsError, SettingsResult};

const APP_DIR: &str = "tilesnap";

/// Pointer interaction constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Palette occupies every x left of this
    pub palette_boundary_x: f64,
    /// Per-axis travel before a press becomes a drag
    pub drag_threshold_px: f64,
    /// Maximum edge midpoint distance for a snap
    pub snap_distance: f64,
    /// Minimum angle between edge normals for a snap, in degrees
    pub opposing_angle_deg: f64,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            palette_boundary_x: 240.0,
            drag_threshold_px: 4.0,
            snap_distance: 50.0,
            opposing_angle_deg: 135.0,
        }
    }
}

/// Where the layout is stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory holding the layout file; the platform data directory when unset
    pub data_dir: Option<PathBuf>,
    /// Layout file stem
    pub layout_key: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: None,
            layout_key: "shapes".to_string(),
        }
    }
}

impl StorageSettings {
    /// The configured directory, or the platform default.
    pub fn resolved_data_dir(&self) -> SettingsResult<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_data_dir(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub interaction: InteractionSettings,
    pub storage: StorageSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a `.json` or `.toml` file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a `.json` or `.toml` file
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// With no explicit path the platform default location is tried. A file
    /// that exists but cannot be read or fails validation is an error.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Ok(path) => path,
                Err(e) => {
                    warn!("No config directory ({}), using defaults", e);
                    return Ok(Self::default());
                }
            },
        };

        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let config = Self::load_from_file(&path)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Validate the settings
    pub fn validate(&self) -> SettingsResult<()> {
        let i = &self.interaction;

        if !(i.palette_boundary_x.is_finite() && i.palette_boundary_x > 0.0) {
            return Err(SettingsError::invalid(
                "interaction.palette_boundary_x",
                "must be > 0",
            ));
        }

        if !(i.drag_threshold_px.is_finite() && i.drag_threshold_px > 0.0) {
            return Err(SettingsError::invalid(
                "interaction.drag_threshold_px",
                "must be > 0",
            ));
        }

        if !(i.snap_distance.is_finite() && i.snap_distance > 0.0) {
            return Err(SettingsError::invalid(
                "interaction.snap_distance",
                "must be > 0",
            ));
        }

        if !(i.opposing_angle_deg > 0.0 && i.opposing_angle_deg < 180.0) {
            return Err(SettingsError::invalid(
                "interaction.opposing_angle_deg",
                "must be between 0 and 180 exclusive",
            ));
        }

        if self.storage.layout_key.trim().is_empty() {
            return Err(SettingsError::invalid(
                "storage.layout_key",
                "must not be empty",
            ));
        }

        Ok(())
    }
}

/// `<config dir>/tilesnap/config.toml`
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join("config.toml"))
        .ok_or_else(|| SettingsError::ConfigDirectory("no config directory".to_string()))
}

/// `<data dir>/tilesnap`
pub fn default_data_dir() -> SettingsResult<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or_else(|| SettingsError::ConfigDirectory("no data directory".to_string()))
}
