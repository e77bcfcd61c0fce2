//! Tile model: shape kinds, their vertex tables, and posed shapes.

use serde::{Deserialize, Serialize};
use std::fmt;

pub use tilesnap_core::Point;

mod kind;
mod polygon;
mod shape;

pub use kind::{ShapeKind, SIDE};
pub use polygon::Polygon;
pub use shape::Shape;

/// Stable identity of a shape. Ids are handed out by
/// [`IdGenerator`](crate::shape_store::IdGenerator) and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(pub u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape-{}", self.0)
    }
}

/// Placement of a shape in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    pub position: Point,
    /// Radians.
    pub rotation: f64,
}

impl Pose {
    pub fn new(position: Point, rotation: f64) -> Self {
        Self { position, rotation }
    }

    pub fn at(x: f64, y: f64) -> Self {
        Self::new(Point::new(x, y), 0.0)
    }
}

/// One polygon edge expressed in world space.
///
/// `normal` is the raw perpendicular of the edge vector, not unit length;
/// only its direction carries meaning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldEdge {
    pub midpoint: Point,
    pub normal: Point,
}
