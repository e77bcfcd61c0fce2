//! The template strip on the left of the canvas.

use crate::model::{Point, Pose, Shape, ShapeId, ShapeKind};
use crate::shape_store::IdGenerator;

/// Default x coordinate separating the palette from the drawing region.
pub const DEFAULT_PALETTE_BOUNDARY_X: f64 = 240.0;

const PALETTE_X: f64 = 120.0;
const PALETTE_Y: [f64; 6] = [100.0, 220.0, 400.0, 580.0, 700.0, 820.0];

/// The vertical line `x = boundary_x` splitting palette from canvas.
///
/// The line itself belongs to neither side on release: presses on it pick
/// palette shapes, but a drop on it neither adds nor removes a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteRegion {
    pub boundary_x: f64,
}

impl Default for PaletteRegion {
    fn default() -> Self {
        Self {
            boundary_x: DEFAULT_PALETTE_BOUNDARY_X,
        }
    }
}

impl PaletteRegion {
    pub fn new(boundary_x: f64) -> Self {
        Self { boundary_x }
    }

    /// Strictly left of the boundary.
    pub fn contains(&self, point: Point) -> bool {
        point.x < self.boundary_x
    }

    /// Strictly right of the boundary.
    pub fn canvas_contains(&self, point: Point) -> bool {
        point.x > self.boundary_x
    }
}

/// One template shape per kind, in [`ShapeKind::ALL`] order.
#[derive(Debug, Clone)]
pub struct Palette {
    shapes: Vec<Shape>,
}

impl Palette {
    pub fn new(ids: &mut IdGenerator) -> Self {
        let mut palette = Self { shapes: Vec::new() };
        palette.regenerate(ids);
        palette
    }

    /// Home pose of the template for `kind`.
    pub fn home_pose(kind: ShapeKind) -> Pose {
        let slot = ShapeKind::ALL
            .iter()
            .position(|k| *k == kind)
            .unwrap_or_default();
        Pose::at(PALETTE_X, PALETTE_Y[slot])
    }

    /// Replaces every template with a fresh instance at its home pose.
    /// Each instance gets a new id.
    pub fn regenerate(&mut self, ids: &mut IdGenerator) {
        self.shapes = ShapeKind::ALL
            .into_iter()
            .map(|kind| Shape::new(ids.generate_id(), kind, Self::home_pose(kind)))
            .collect();
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    pub fn topmost_hit(&self, point: Point) -> Option<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .find(|s| s.hit_test(point))
            .map(Shape::id)
    }
}
