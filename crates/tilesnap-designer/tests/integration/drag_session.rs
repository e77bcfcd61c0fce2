//! End-to-end drag scenarios against a controller

use tilesnap_designer::{
    DragController, DragSource, DragState, InteractionConfig, MemoryStore, Point, Pose, Shape,
    ShapeId, ShapeKind, TileSession,
};

fn palette_ids(controller: &DragController) -> Vec<ShapeId> {
    controller.palette().shapes().iter().map(Shape::id).collect()
}

#[test]
fn test_palette_drop_adds_fresh_shape() {
    let mut controller = DragController::default();
    let before = palette_ids(&controller);
    let square = before[0];

    controller.pointer_down(Point::new(120.0, 100.0));
    controller.pointer_move(Point::new(200.0, 100.0)).unwrap();
    assert!(matches!(
        controller.state(),
        DragState::Dragging {
            source: DragSource::Palette,
            ..
        }
    ));
    controller.pointer_move(Point::new(400.0, 100.0)).unwrap();
    let outcome = controller.pointer_up(Point::new(400.0, 100.0)).unwrap();

    let added = outcome.added.expect("dropped on the canvas");
    assert_ne!(added, square);
    assert!(!before.contains(&added));
    assert_eq!(controller.shapes().len(), 1);

    let live = controller.shapes().get(added).unwrap();
    assert_eq!(live.kind(), ShapeKind::Square);
    assert!(live.position().approx_eq(Point::new(400.0, 100.0), 1e-9));

    // Palette is back to six templates at home with new ids.
    let after = palette_ids(&controller);
    assert_eq!(after.len(), 6);
    assert!(after.iter().all(|id| !before.contains(id) && *id != added));
    assert_eq!(controller.palette().shapes()[0].pose, Pose::at(120.0, 100.0));

    // The new shape is the hover target.
    assert_eq!(controller.hover_shape_id(), Some(added));
}

#[test]
fn test_palette_drop_inside_palette_adds_nothing() {
    let mut controller = DragController::default();
    controller.pointer_down(Point::new(120.0, 100.0));
    controller.pointer_move(Point::new(160.0, 140.0)).unwrap();
    let outcome = controller.pointer_up(Point::new(160.0, 140.0)).unwrap();

    assert!(outcome.added.is_none());
    assert!(outcome.layout_changed);
    assert!(controller.shapes().is_empty());
    assert_eq!(controller.palette().shapes()[0].pose, Pose::at(120.0, 100.0));
}

#[test]
fn test_live_shape_dropped_on_palette_is_removed() {
    let live = Shape::new(ShapeId(1), ShapeKind::Hexagon, Pose::at(500.0, 500.0));
    let mut controller = DragController::with_shapes(InteractionConfig::default(), vec![live]);

    controller.pointer_down(Point::new(500.0, 500.0));
    controller.pointer_move(Point::new(300.0, 500.0)).unwrap();
    assert!(!controller.render_frame().dragging_onto_palette);
    controller.pointer_move(Point::new(100.0, 500.0)).unwrap();
    assert!(controller.render_frame().dragging_onto_palette);

    let outcome = controller.pointer_up(Point::new(100.0, 500.0)).unwrap();
    assert_eq!(outcome.removed, Some(ShapeId(1)));
    assert!(controller.shapes().is_empty());
}

#[test]
fn test_dragged_shape_snaps_on_release() {
    let shapes = vec![
        Shape::new(ShapeId(1), ShapeKind::Square, Pose::at(500.0, 300.0)),
        Shape::new(ShapeId(2), ShapeKind::Square, Pose::at(650.0, 300.0)),
    ];
    let mut controller = DragController::with_shapes(InteractionConfig::default(), shapes);

    controller.pointer_down(Point::new(500.0, 300.0));
    controller.pointer_move(Point::new(510.0, 300.0)).unwrap();
    let candidate = *controller.candidate().expect("right edge near left edge");
    assert_eq!(candidate.fixed.shape_id, ShapeId(2));
    assert_eq!(candidate.moving.shape_id, ShapeId(1));

    let outcome = controller.pointer_up(Point::new(510.0, 300.0)).unwrap();
    assert!(outcome.snapped);
    let moved = controller.shapes().get(ShapeId(1)).unwrap();
    assert!(moved.position().approx_eq(Point::new(550.0, 300.0), 1e-9));
    assert!(moved.rotation().abs() < 1e-9);
}

#[test]
fn test_palette_shape_snaps_before_cloning() {
    let fixed = Shape::new(ShapeId(1), ShapeKind::Square, Pose::at(500.0, 300.0));
    let mut controller = DragController::with_shapes(InteractionConfig::default(), vec![fixed]);

    controller.pointer_down(Point::new(120.0, 100.0));
    controller.pointer_move(Point::new(640.0, 310.0)).unwrap();
    assert!(controller.candidate().is_some());
    let outcome = controller.pointer_up(Point::new(640.0, 310.0)).unwrap();

    assert!(outcome.snapped);
    let added = controller.shapes().get(outcome.added.unwrap()).unwrap();
    assert!(added.position().approx_eq(Point::new(600.0, 300.0), 1e-9));
}

#[test]
fn test_candidate_ignores_palette_shapes() {
    let live = Shape::new(ShapeId(1), ShapeKind::Square, Pose::at(600.0, 600.0));
    let mut controller = DragController::with_shapes(InteractionConfig::default(), vec![live]);

    // Park the live square right next to the palette square.
    controller.pointer_down(Point::new(600.0, 600.0));
    controller.pointer_move(Point::new(215.0, 100.0)).unwrap();
    assert!(controller.candidate().is_none());
}

#[test]
fn test_press_on_empty_canvas_never_drags() {
    let mut controller = DragController::default();
    controller.pointer_down(Point::new(700.0, 700.0));
    let outcome = controller.pointer_move(Point::new(800.0, 800.0)).unwrap();
    assert!(!outcome.drag_started);
    assert!(matches!(
        controller.state(),
        DragState::PointerDown { target: None, .. }
    ));
    let dropped = controller.pointer_up(Point::new(800.0, 800.0)).unwrap();
    assert!(!dropped.layout_changed);
    assert_eq!(controller.state(), &DragState::Idle);
}

#[test]
fn test_rotation_tracks_tangential_pull() {
    let live = Shape::new(ShapeId(1), ShapeKind::Square, Pose::at(500.0, 500.0));
    let mut controller = DragController::with_shapes(InteractionConfig::default(), vec![live]);

    // Grab the right edge and pull straight down: a clockwise turn on screen,
    // which is a positive rotation in the y-down frame.
    controller.pointer_down(Point::new(540.0, 500.0));
    controller.pointer_move(Point::new(540.0, 520.0)).unwrap();
    let shape = controller.shapes().get(ShapeId(1)).unwrap();
    assert!(shape.rotation() > 0.0);
}

#[test]
fn test_session_opens_with_a_pending_frame() {
    let session =
        TileSession::open(InteractionConfig::default(), Box::new(MemoryStore::new())).unwrap();
    assert!(session.frames().is_pending());
}
