use tilesnap_core::GeometryError;

use super::Point;

const MIN_EDGE_LENGTH_SQ: f64 = 1e-12;

/// An immutable, validated, convex vertex list in local space.
///
/// Winding convention: for every edge `v1 -> v2` and every interior point
/// `p`, `(v2 - v1) x (p - v1) >= 0`. In the y-down canvas frame this is
/// clockwise on screen (counter-clockwise in a y-up frame). A list wound
/// the other way would silently invert hit testing and edge normals, so
/// construction rejects it.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                count: vertices.len(),
            });
        }

        let n = vertices.len();
        for i in 0..n {
            let v1 = vertices[i];
            let v2 = vertices[(i + 1) % n];
            if v1.distance_squared(v2) < MIN_EDGE_LENGTH_SQ {
                return Err(GeometryError::DegenerateEdge { index: i });
            }
        }

        let area = signed_area(&vertices);
        if area <= 0.0 {
            return Err(GeometryError::InvertedWinding { area });
        }

        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Consecutive vertex pairs, wrapping from the last vertex to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Squared distance from the local origin to the farthest vertex.
    pub fn max_radius_squared(&self) -> f64 {
        self.vertices
            .iter()
            .map(Point::length_squared)
            .fold(0.0, f64::max)
    }

    /// Area-weighted centroid.
    pub fn centroid(&self) -> Point {
        let area = signed_area(&self.vertices);
        let mut cx = 0.0;
        let mut cy = 0.0;
        for (a, b) in self.edges() {
            let f = a.cross(b);
            cx += (a.x + b.x) * f;
            cy += (a.y + b.y) * f;
        }
        Point::new(cx / (6.0 * area), cy / (6.0 * area))
    }
}

/// Shoelace signed area; positive under this crate's winding convention.
fn signed_area(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    (0..n)
        .map(|i| vertices[i].cross(vertices[(i + 1) % n]))
        .sum::<f64>()
        / 2.0
}
