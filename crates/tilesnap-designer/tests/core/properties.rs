//! Property tests for the geometry and snap invariants

use proptest::prelude::*;
use tilesnap_core::normalize_angle;
use tilesnap_designer::{
    apply_match, find_closest_match, MatchConfig, Point, Pose, Shape, ShapeId, ShapeKind,
};

fn kind() -> impl Strategy<Value = ShapeKind> {
    (0..ShapeKind::ALL.len()).prop_map(|i| ShapeKind::ALL[i])
}

fn pose() -> impl Strategy<Value = Pose> {
    (-2000.0..2000.0f64, -2000.0..2000.0f64, -10.0..10.0f64)
        .prop_map(|(x, y, r)| Pose::new(Point::new(x, y), r))
}

proptest! {
    /// World and local transforms are inverses for every pose.
    #[test]
    fn local_world_round_trip(
        kind in kind(),
        pose in pose(),
        lx in -200.0..200.0f64,
        ly in -200.0..200.0f64,
    ) {
        let shape = Shape::new(ShapeId(1), kind, pose);
        let local = Point::new(lx, ly);
        let back = shape.to_local_point(shape.to_world_point(local));
        prop_assert!(back.approx_eq(local, 1e-6), "{:?} -> {:?}", local, back);
    }

    /// The centroid always hits.
    #[test]
    fn centroid_always_hits(kind in kind(), pose in pose()) {
        let shape = Shape::new(ShapeId(1), kind, pose);
        prop_assert!(shape.hit_test(pose.position));
    }

    /// Moving the shape and the query point together never changes the answer.
    #[test]
    fn hit_test_is_translation_invariant(
        kind in kind(),
        rotation in -10.0..10.0f64,
        qx in -150.0..150.0f64,
        qy in -150.0..150.0f64,
        dx in -1000.0..1000.0f64,
        dy in -1000.0..1000.0f64,
    ) {
        let offset = Point::new(dx, dy);
        let query = Point::new(qx, qy);
        let here = Shape::new(ShapeId(1), kind, Pose::new(Point::ZERO, rotation));
        let there = Shape::new(ShapeId(1), kind, Pose::new(offset, rotation));
        prop_assert_eq!(here.hit_test(query), there.hit_test(query + offset));
    }

    /// A point beyond the bounding radius never hits.
    #[test]
    fn far_points_never_hit(kind in kind(), pose in pose(), angle in -3.2..3.2f64) {
        let shape = Shape::new(ShapeId(1), kind, pose);
        let reach = shape.max_radius_squared().sqrt() + 1e-3;
        let probe = pose.position + Point::new(angle.cos(), angle.sin()) * reach;
        prop_assert!(!shape.hit_test(probe));
    }

    /// Any accepted match leaves the two edges flush and facing.
    #[test]
    fn snap_leaves_edges_flush(
        moving_kind in kind(),
        fixed_kind in kind(),
        fixed_rotation in -3.1..3.1f64,
        moving_rotation in -3.1..3.1f64,
        dx in -160.0..160.0f64,
        dy in -160.0..160.0f64,
    ) {
        let fixed = Shape::new(ShapeId(1), fixed_kind, Pose::new(Point::new(500.0, 500.0), fixed_rotation));
        let mut moving = Shape::new(
            ShapeId(2),
            moving_kind,
            Pose::new(Point::new(500.0 + dx, 500.0 + dy), moving_rotation),
        );

        if let Some(found) = find_closest_match(&moving, [&fixed], &MatchConfig::default()) {
            apply_match(&mut moving, &found).unwrap();
            let a = moving.world_edge(found.moving.edge_index).unwrap();
            let b = fixed.world_edge(found.fixed.edge_index).unwrap();
            prop_assert!(a.midpoint.approx_eq(b.midpoint, 1e-6));
            let diff = normalize_angle(a.normal.angle() - b.normal.angle());
            prop_assert!((diff.abs() - std::f64::consts::PI).abs() < 1e-6);
        }
    }
}
