use std::cell::OnceCell;

use lyon::math::point;
use lyon::path::Path;

use super::{Point, Pose, ShapeId, ShapeKind, WorldEdge};

/// A tile placed in world space.
///
/// The vertex list comes from the kind's static table and never changes;
/// only the pose moves. World vertices are always
/// `vertex.rotate(pose.rotation) + pose.position`.
#[derive(Debug, Clone)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    pub pose: Pose,
    max_radius_sq: OnceCell<f64>,
}

impl Shape {
    pub fn new(id: ShapeId, kind: ShapeKind, pose: Pose) -> Self {
        Self {
            id,
            kind,
            pose,
            max_radius_sq: OnceCell::new(),
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn position(&self) -> Point {
        self.pose.position
    }

    pub fn rotation(&self) -> f64 {
        self.pose.rotation
    }

    pub fn local_vertices(&self) -> &'static [Point] {
        self.kind.vertices()
    }

    /// Squared distance from the centroid to the farthest vertex, computed
    /// on first use and kept for the life of the shape.
    pub fn max_radius_squared(&self) -> f64 {
        *self
            .max_radius_sq
            .get_or_init(|| self.kind.polygon().max_radius_squared())
    }

    /// A new shape of the same kind and pose under a fresh identity.
    pub fn duplicate(&self, id: ShapeId) -> Shape {
        Shape::new(id, self.kind, self.pose)
    }

    pub fn to_world_point(&self, local: Point) -> Point {
        local.rotate(self.pose.rotation) + self.pose.position
    }

    pub fn to_local_point(&self, world: Point) -> Point {
        (world - self.pose.position).rotate(-self.pose.rotation)
    }

    /// Returns true if `point` lies inside the polygon in its current pose.
    pub fn hit_test(&self, point: Point) -> bool {
        if point.distance_squared(self.pose.position) > self.max_radius_squared() {
            return false;
        }

        let local = self.to_local_point(point);

        // Convex polygon: the point must be on the inner side of every edge.
        self.kind
            .polygon()
            .edges()
            .all(|(v1, v2)| (v2 - v1).cross(local - v1) >= 0.0)
    }

    pub fn world_vertices(&self) -> Vec<Point> {
        self.local_vertices()
            .iter()
            .map(|v| self.to_world_point(*v))
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.local_vertices().len()
    }

    /// Edge `index` (from vertex `index` to the next one) in world space.
    pub fn world_edge(&self, index: usize) -> Option<WorldEdge> {
        let vertices = self.local_vertices();
        if index >= vertices.len() {
            return None;
        }
        let v1 = vertices[index];
        let v2 = vertices[(index + 1) % vertices.len()];
        Some(self.edge_to_world(v1, v2))
    }

    pub fn world_edges(&self) -> Vec<WorldEdge> {
        self.kind
            .polygon()
            .edges()
            .map(|(v1, v2)| self.edge_to_world(v1, v2))
            .collect()
    }

    fn edge_to_world(&self, v1: Point, v2: Point) -> WorldEdge {
        let midpoint = v1.midpoint(v2);
        let normal = (v2 - v1).perpendicular();
        WorldEdge {
            midpoint: self.to_world_point(midpoint),
            normal: normal.rotate(self.pose.rotation),
        }
    }

    pub fn translate(&mut self, delta: Point) {
        self.pose.position += delta;
    }

    pub fn rotate_by(&mut self, radians: f64) {
        self.pose.rotation += radians;
    }

    /// Closed outline in world space for path-based renderers.
    pub fn outline(&self) -> Path {
        let mut builder = Path::builder();
        for (i, v) in self.world_vertices().into_iter().enumerate() {
            let p = point(v.x as f32, v.y as f32);
            if i == 0 {
                builder.begin(p);
            } else {
                builder.line_to(p);
            }
        }
        builder.close();
        builder.build()
    }
}
