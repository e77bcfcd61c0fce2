use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use tilesnap_core::PersistenceError;

use super::{Point, Polygon};

/// Edge length shared by every tile kind.
pub const SIDE: f64 = 100.0;

/// The closed set of tile kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    Triangle,
    Hexagon,
    FatRhombus,
    SkinnyRhombus,
    Trapezoid,
}

impl ShapeKind {
    /// Every kind, in palette order.
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Square,
        ShapeKind::Triangle,
        ShapeKind::Hexagon,
        ShapeKind::FatRhombus,
        ShapeKind::SkinnyRhombus,
        ShapeKind::Trapezoid,
    ];

    fn index(self) -> usize {
        match self {
            ShapeKind::Square => 0,
            ShapeKind::Triangle => 1,
            ShapeKind::Hexagon => 2,
            ShapeKind::FatRhombus => 3,
            ShapeKind::SkinnyRhombus => 4,
            ShapeKind::Trapezoid => 5,
        }
    }

    /// The kind's local-space polygon, centered on its centroid.
    pub fn polygon(self) -> &'static Polygon {
        &POLYGONS[self.index()]
    }

    pub fn vertices(self) -> &'static [Point] {
        self.polygon().vertices()
    }

    /// Tag used in the stored layout.
    pub fn tag(self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::FatRhombus => "fatRhombus",
            ShapeKind::SkinnyRhombus => "skinnyRhombus",
            ShapeKind::Trapezoid => "trapezoid",
        }
    }

    pub fn from_tag(tag: &str) -> Result<Self, PersistenceError> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| PersistenceError::UnknownKind {
                tag: tag.to_string(),
            })
    }

    /// Fill color hint for renderers.
    pub fn color(self) -> &'static str {
        match self {
            ShapeKind::Square => "#f70",
            ShapeKind::Triangle => "#0a0",
            ShapeKind::Hexagon => "#ff0",
            ShapeKind::FatRhombus => "#02f",
            ShapeKind::SkinnyRhombus => "#ec8",
            ShapeKind::Trapezoid => "#f00",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ShapeKind {
    type Err = PersistenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::from_tag(s)
    }
}

static POLYGONS: LazyLock<[Polygon; 6]> = LazyLock::new(|| {
    ShapeKind::ALL.map(|kind| {
        // Fixed data, checked by test_every_table_is_valid_and_centered.
        Polygon::new(vertex_table(kind))
            .unwrap_or_else(|e| panic!("invalid vertex table for {kind}: {e}"))
    })
});

fn vertex_table(kind: ShapeKind) -> Vec<Point> {
    let sqrt3 = 3f64.sqrt();
    match kind {
        ShapeKind::Square => vec![
            Point::new(-SIDE / 2.0, -SIDE / 2.0),
            Point::new(SIDE / 2.0, -SIDE / 2.0),
            Point::new(SIDE / 2.0, SIDE / 2.0),
            Point::new(-SIDE / 2.0, SIDE / 2.0),
        ],
        ShapeKind::Triangle => vec![
            Point::new(-SIDE / 2.0, -SIDE * sqrt3 / 6.0),
            Point::new(SIDE / 2.0, -SIDE * sqrt3 / 6.0),
            Point::new(0.0, SIDE * sqrt3 / 3.0),
        ],
        ShapeKind::Hexagon => vec![
            Point::new(SIDE, 0.0),
            Point::new(SIDE / 2.0, SIDE * sqrt3 / 2.0),
            Point::new(-SIDE / 2.0, SIDE * sqrt3 / 2.0),
            Point::new(-SIDE, 0.0),
            Point::new(-SIDE / 2.0, -SIDE * sqrt3 / 2.0),
            Point::new(SIDE / 2.0, -SIDE * sqrt3 / 2.0),
        ],
        ShapeKind::FatRhombus => vec![
            Point::new(SIDE * sqrt3 / 2.0, 0.0),
            Point::new(0.0, SIDE / 2.0),
            Point::new(-SIDE * sqrt3 / 2.0, 0.0),
            Point::new(0.0, -SIDE / 2.0),
        ],
        ShapeKind::SkinnyRhombus => {
            let (sin, cos) = (std::f64::consts::PI / 12.0).sin_cos();
            vec![
                Point::new(SIDE * cos, 0.0),
                Point::new(0.0, SIDE * sin),
                Point::new(-SIDE * cos, 0.0),
                Point::new(0.0, -SIDE * sin),
            ]
        }
        ShapeKind::Trapezoid => {
            // Half hexagon. The long base sits 4h/9 below the centroid and
            // the short base 5h/9 above it.
            let h = SIDE * sqrt3 / 2.0;
            vec![
                Point::new(-SIDE, 4.0 * h / 9.0),
                Point::new(-SIDE / 2.0, -5.0 * h / 9.0),
                Point::new(SIDE / 2.0, -5.0 * h / 9.0),
                Point::new(SIDE, 4.0 * h / 9.0),
            ]
        }
    }
}
