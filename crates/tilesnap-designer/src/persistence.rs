//! Durable storage for the live shape collection.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tilesnap_core::PersistenceError;
use tracing::info;

use crate::model::Shape;
use crate::serialization::{decode_layout, encode_layout};

/// Default storage key.
pub const DEFAULT_LAYOUT_KEY: &str = "shapes";

/// Storage for one layout under a fixed key.
pub trait LayoutStore {
    /// Loads the stored layout. A missing layout is an empty one.
    fn load(&self) -> Result<Vec<Shape>, PersistenceError>;

    fn save(&mut self, shapes: &[Shape]) -> Result<(), PersistenceError>;

    fn clear(&mut self) -> Result<(), PersistenceError>;
}

/// Stores the layout as `<data_dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{key}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LayoutStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Shape>, PersistenceError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let decoded = decode_layout(&json);
        info!(
            "Loaded {} shapes from {} ({} skipped)",
            decoded.shapes.len(),
            self.path.display(),
            decoded.skipped
        );
        Ok(decoded.shapes)
    }

    fn save(&mut self, shapes: &[Shape]) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, encode_layout(shapes)?)?;
        info!("Saved {} shapes to {}", shapes.len(), self.path.display());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), PersistenceError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Removed layout {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Keeps the encoded layout in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    json: Option<String>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an already-encoded layout.
    pub fn with_json(json: impl Into<String>) -> Self {
        Self {
            json: Some(json.into()),
            saves: 0,
        }
    }

    pub fn json(&self) -> Option<&str> {
        self.json.as_deref()
    }

    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl LayoutStore for MemoryStore {
    fn load(&self) -> Result<Vec<Shape>, PersistenceError> {
        Ok(self
            .json
            .as_deref()
            .map(|json| decode_layout(json).shapes)
            .unwrap_or_default())
    }

    fn save(&mut self, shapes: &[Shape]) -> Result<(), PersistenceError> {
        self.json = Some(encode_layout(shapes)?);
        self.saves += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), PersistenceError> {
        self.json = None;
        Ok(())
    }
}
