//! # Tilesnap
//!
//! Drag polygonal tiles off a palette, turn them by where they are grabbed,
//! and let them snap edge to edge against their neighbours.
//!
//! ## Architecture
//!
//! Tilesnap is organized as a workspace with multiple crates:
//!
//! 1. **tilesnap-core** - Point math, angle helpers, error types
//! 2. **tilesnap-designer** - Tile kinds, hit testing, edge matching, snapping,
//!    the drag controller, rendering and layout persistence
//! 3. **tilesnap-settings** - Interaction and storage configuration
//! 4. **tilesnap** - Headless binary that replays pointer scripts, renders
//!    frames to SVG and manages the stored layout

pub mod types;

pub use tilesnap_core::{Error, Result};
pub use tilesnap_designer as designer;
pub use tilesnap_settings::{Config, InteractionSettings, StorageSettings};

pub use types::{load_script, replay, PointerEventKind, ReplaySummary, ScriptEvent};

use anyhow::Context;
use tilesnap_designer::{InteractionConfig, JsonFileStore, MatchConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Controller constants from the configured interaction settings.
pub fn interaction_config(settings: &InteractionSettings) -> InteractionConfig {
    InteractionConfig {
        palette_boundary_x: settings.palette_boundary_x,
        drag_threshold: settings.drag_threshold_px,
        matching: MatchConfig {
            max_distance: settings.snap_distance,
            min_opposing_angle: settings.opposing_angle_deg.to_radians(),
        },
    }
}

/// The layout file store named by the storage settings.
pub fn open_store(storage: &StorageSettings) -> anyhow::Result<JsonFileStore> {
    let dir = storage
        .resolved_data_dir()
        .context("Failed to resolve layout directory")?;
    Ok(JsonFileStore::new(dir, &storage.layout_key))
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Formatted output on stderr, keeping stdout free for command output
/// - RUST_LOG environment variable support, `info` otherwise
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}
