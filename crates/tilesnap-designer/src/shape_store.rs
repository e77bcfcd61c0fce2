//! Shape arena in draw order plus the shared id generator.

use crate::model::{Point, Shape, ShapeId};

/// Largest id accepted from a stored layout. Everything above is left to
/// the generator so the counter can never run out.
pub const MAX_STORED_ID: u64 = u64::MAX / 2;

/// Monotonic id source shared by the palette and the live collection.
///
/// Ids are never reused, not even after the shape they named is removed.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next_id: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    pub fn generate_id(&mut self) -> ShapeId {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        ShapeId(id)
    }

    /// Moves the counter forward to at least `next_id`. The counter never
    /// moves backwards.
    pub fn set_next_id(&mut self, next_id: u64) {
        self.next_id = self.next_id.max(next_id);
    }
}

/// Ordered collection of shapes. The last shape is drawn last and is the
/// topmost for hit testing.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Builds a store from shapes already in draw order. Later entries with
    /// an id seen earlier are dropped.
    pub fn from_shapes(shapes: impl IntoIterator<Item = Shape>) -> Self {
        let mut store = Self::new();
        for shape in shapes {
            store.insert(shape);
        }
        store
    }

    /// Appends `shape` on top. Returns false, leaving the store unchanged,
    /// if a shape with the same id is already present.
    pub fn insert(&mut self, shape: Shape) -> bool {
        if self.contains(shape.id()) {
            return false;
        }
        self.shapes.push(shape);
        true
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.position(id)?;
        Some(self.shapes.remove(index))
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.position(id).is_some()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Shape> + '_ {
        self.shapes.iter()
    }

    pub fn as_slice(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn ids(&self) -> Vec<ShapeId> {
        self.shapes.iter().map(Shape::id).collect()
    }

    pub fn max_id(&self) -> Option<ShapeId> {
        self.shapes.iter().map(Shape::id).max()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Moves the shape to the end of the draw order. Returns false if the
    /// id is unknown.
    pub fn bring_to_front(&mut self, id: ShapeId) -> bool {
        match self.position(id) {
            Some(index) => {
                let shape = self.shapes.remove(index);
                self.shapes.push(shape);
                true
            }
            None => false,
        }
    }

    /// The last-drawn shape containing `point`.
    pub fn topmost_hit(&self, point: Point) -> Option<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .find(|s| s.hit_test(point))
            .map(Shape::id)
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    fn position(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|s| s.id() == id)
    }
}
