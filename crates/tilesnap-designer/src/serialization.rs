//! Serialization and deserialization for tile layouts.
//!
//! A layout is stored as JSON with an explicit kind tag per shape. Decoding
//! is lenient per entry: a record that cannot be read is dropped with a
//! warning and the rest of the layout survives.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tilesnap_core::PersistenceError;
use tracing::warn;

use crate::model::{Point, Pose, Shape, ShapeId, ShapeKind};
use crate::shape_store::MAX_STORED_ID;

/// Layout file format version
pub const LAYOUT_FORMAT_VERSION: u32 = 1;

/// Complete stored layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutFile {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub shapes: Vec<ShapeRecord>,
}

/// One stored shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    pub id: u64,
    #[serde(alias = "type")]
    pub kind: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub rotation: f64,
}

impl ShapeRecord {
    pub fn from_shape(shape: &Shape) -> Self {
        Self {
            id: shape.id().0,
            kind: shape.kind().tag().to_string(),
            x: shape.position().x,
            y: shape.position().y,
            rotation: shape.rotation(),
        }
    }

    /// Rebuilds the shape, dispatching on the stored kind tag.
    pub fn to_shape(&self) -> Result<Shape, PersistenceError> {
        let kind = ShapeKind::from_tag(&self.kind)?;
        Ok(Shape::new(
            ShapeId(self.id),
            kind,
            Pose::new(Point::new(self.x, self.y), self.rotation),
        ))
    }
}

impl LayoutFile {
    pub fn from_shapes<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> Self {
        Self {
            version: LAYOUT_FORMAT_VERSION,
            saved_at: Utc::now(),
            shapes: shapes.into_iter().map(ShapeRecord::from_shape).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Result of decoding a stored layout.
#[derive(Debug, Clone, Default)]
pub struct DecodedLayout {
    pub shapes: Vec<Shape>,
    /// Entries dropped because they could not be read.
    pub skipped: usize,
}

/// Envelope read before the individual records, so one bad record does not
/// take the whole layout down with it.
#[derive(Debug, Deserialize)]
struct RawLayout {
    #[serde(default)]
    version: Option<u32>,
    #[serde(default)]
    shapes: Vec<serde_json::Value>,
}

pub fn encode_layout(shapes: &[Shape]) -> Result<String, PersistenceError> {
    LayoutFile::from_shapes(shapes).to_json()
}

/// Decodes a stored layout.
///
/// Malformed JSON yields an empty layout. Unreadable entries, unknown kind
/// tags, non-finite poses, ids above [`MAX_STORED_ID`] and repeated ids are
/// skipped one by one.
pub fn decode_layout(json: &str) -> DecodedLayout {
    let raw: RawLayout = match serde_json::from_str(json) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Discarding unreadable layout: {}", e);
            return DecodedLayout::default();
        }
    };

    if let Some(version) = raw.version {
        if version > LAYOUT_FORMAT_VERSION {
            warn!(
                "Layout version {} is newer than supported version {}",
                version, LAYOUT_FORMAT_VERSION
            );
        }
    }

    let mut decoded = DecodedLayout::default();
    let mut seen = HashSet::new();

    for (index, value) in raw.shapes.into_iter().enumerate() {
        let shape = serde_json::from_value::<ShapeRecord>(value)
            .map_err(PersistenceError::from)
            .and_then(|record| record.to_shape());

        match shape {
            Ok(shape) if !shape.position().is_finite() || !shape.rotation().is_finite() => {
                warn!("Skipping layout entry {}: non-finite pose", index);
                decoded.skipped += 1;
            }
            Ok(shape) if shape.id().0 > MAX_STORED_ID => {
                warn!("Skipping layout entry {}: id {} out of range", index, shape.id().0);
                decoded.skipped += 1;
            }
            Ok(shape) if !seen.insert(shape.id()) => {
                warn!("Skipping layout entry {}: duplicate id {}", index, shape.id());
                decoded.skipped += 1;
            }
            Ok(shape) => decoded.shapes.push(shape),
            Err(e) => {
                warn!("Skipping layout entry {}: {}", index, e);
                decoded.skipped += 1;
            }
        }
    }

    decoded
}
