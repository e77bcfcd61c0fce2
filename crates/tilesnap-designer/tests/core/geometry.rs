//! Shape geometry integration tests

use std::f64::consts::PI;

use tilesnap_designer::{Point, Pose, Shape, ShapeId, ShapeKind, SIDE};

fn shape(kind: ShapeKind, x: f64, y: f64, rotation: f64) -> Shape {
    Shape::new(ShapeId(1), kind, Pose::new(Point::new(x, y), rotation))
}

#[test]
fn test_every_kind_hits_its_centre() {
    for kind in ShapeKind::ALL {
        let s = shape(kind, 640.0, 480.0, 2.1);
        assert!(s.hit_test(Point::new(640.0, 480.0)), "{kind}");
    }
}

#[test]
fn test_nothing_hits_beyond_max_radius() {
    for kind in ShapeKind::ALL {
        let s = shape(kind, 0.0, 0.0, 0.0);
        let r = s.max_radius_squared().sqrt();
        for step in 0..16 {
            let a = step as f64 * PI / 8.0;
            let p = Point::new(a.cos(), a.sin()) * (r + 0.01);
            assert!(!s.hit_test(p), "{kind} at angle {a}");
        }
    }
}

#[test]
fn test_edge_midpoints_sit_on_the_boundary() {
    for kind in ShapeKind::ALL {
        let s = shape(kind, 300.0, 200.0, 0.9);
        for edge in s.world_edges() {
            // Nudged inward along the normal, an edge midpoint lies inside.
            let n = edge.normal * (1.0 / edge.normal.length());
            assert!(s.hit_test(edge.midpoint - n * 0.5), "{kind}");
            assert!(!s.hit_test(edge.midpoint + n * 0.5), "{kind}");
        }
    }
}

#[test]
fn test_world_vertices_follow_pose() {
    let s = shape(ShapeKind::Square, 100.0, 100.0, PI / 2.0);
    let vertices = s.world_vertices();
    assert_eq!(vertices.len(), 4);
    // (-50, -50) turned a quarter becomes (50, -50).
    assert!(vertices[0].approx_eq(Point::new(150.0, 50.0), 1e-9));
}

#[test]
fn test_hexagon_edges_are_side_length_apart() {
    let s = shape(ShapeKind::Hexagon, 0.0, 0.0, 0.0);
    let apothem = SIDE * 3f64.sqrt() / 2.0;
    for edge in s.world_edges() {
        assert!((edge.midpoint.length() - apothem).abs() < 1e-9);
    }
}

#[test]
fn test_translate_and_rotate_by() {
    let mut s = shape(ShapeKind::Triangle, 10.0, 10.0, 0.0);
    s.translate(Point::new(5.0, -5.0));
    s.rotate_by(0.25);
    s.rotate_by(0.25);
    assert_eq!(s.position(), Point::new(15.0, 5.0));
    assert!((s.rotation() - 0.5).abs() < 1e-12);
}
