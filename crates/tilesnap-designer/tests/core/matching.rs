//! Edge matching and snapping integration tests

use std::f64::consts::PI;

use tilesnap_core::normalize_angle;
use tilesnap_designer::{
    apply_match, find_closest_match, MatchConfig, Point, Pose, Shape, ShapeId, ShapeKind,
};

fn shape(id: u64, kind: ShapeKind, x: f64, y: f64, rotation: f64) -> Shape {
    Shape::new(ShapeId(id), kind, Pose::new(Point::new(x, y), rotation))
}

fn assert_flush(moving: &Shape, fixed: &Shape, moving_edge: usize, fixed_edge: usize) {
    let a = moving.world_edge(moving_edge).unwrap();
    let b = fixed.world_edge(fixed_edge).unwrap();
    assert!(
        a.midpoint.approx_eq(b.midpoint, 1e-6),
        "midpoints {:?} and {:?}",
        a.midpoint,
        b.midpoint
    );
    let diff = normalize_angle(a.normal.angle() - b.normal.angle());
    assert!((diff.abs() - PI).abs() < 1e-9, "normals differ by {diff}");
}

#[test]
fn test_square_beside_square_scenario() {
    let mut moving = shape(1, ShapeKind::Square, 5.0, 0.0, 0.0);
    let fixed = shape(2, ShapeKind::Square, 150.0, 0.0, 0.0);

    let found = find_closest_match(&moving, [&fixed], &MatchConfig::default()).unwrap();
    apply_match(&mut moving, &found).unwrap();

    assert!(moving.position().approx_eq(Point::new(50.0, 0.0), 1e-9));
    assert!(moving.rotation().abs() < 1e-9);
    assert_flush(&moving, &fixed, found.moving.edge_index, found.fixed.edge_index);
}

#[test]
fn test_every_kind_snaps_flush_to_a_hexagon() {
    let fixed = shape(100, ShapeKind::Hexagon, 600.0, 400.0, 0.0);
    for (i, kind) in ShapeKind::ALL.into_iter().enumerate() {
        // Approach the hexagon's right side, slightly turned.
        let mut moving = shape(i as u64 + 1, kind, 760.0, 400.0, 0.2);
        let config = MatchConfig {
            max_distance: 120.0,
            ..MatchConfig::default()
        };
        let Some(found) = find_closest_match(&moving, [&fixed], &config) else {
            panic!("{kind} found no edge to snap to");
        };
        apply_match(&mut moving, &found).unwrap();
        assert_flush(&moving, &fixed, found.moving.edge_index, found.fixed.edge_index);
        assert!(moving.rotation() > -PI && moving.rotation() <= PI);
    }
}

#[test]
fn test_none_when_opposing_pair_is_out_of_range() {
    let moving = shape(1, ShapeKind::Triangle, 0.0, 0.0, 0.0);
    let fixed = shape(2, ShapeKind::Triangle, 400.0, 0.0, PI);
    assert!(find_closest_match(&moving, [&fixed], &MatchConfig::default()).is_none());
}

#[test]
fn test_tighter_angle_rejects_skewed_pair() {
    let moving = shape(1, ShapeKind::Square, 0.0, 0.0, 0.5);
    let fixed = shape(2, ShapeKind::Square, 130.0, 0.0, 0.0);

    // A 0.5 rad skew still counts as opposing under the default 135°...
    assert!(find_closest_match(&moving, [&fixed], &MatchConfig::default()).is_some());

    // ...but not once the required opposition is raised to 170°.
    let strict = MatchConfig {
        min_opposing_angle: 170f64.to_radians(),
        ..MatchConfig::default()
    };
    assert!(find_closest_match(&moving, [&fixed], &strict).is_none());
}
