//! SVG renderer integration tests

use tilesnap_designer::{
    InteractionConfig, MemoryStore, Point, Pose, Shape, ShapeId, ShapeKind, SvgRenderer,
    TileSession,
};

fn session_with(shapes: &[Shape]) -> TileSession {
    let mut store = MemoryStore::new();
    tilesnap_designer::LayoutStore::save(&mut store, shapes).unwrap();
    TileSession::open(InteractionConfig::default(), Box::new(store)).unwrap()
}

#[test]
fn test_paint_only_when_pending() {
    let mut session = session_with(&[]);
    let mut renderer = SvgRenderer::new(800, 600);
    assert!(session.paint(&mut renderer));
    assert!(!session.paint(&mut renderer));
    assert_eq!(renderer.frames(), 1);
    assert_eq!(renderer.document().matches("<path ").count(), 6);
}

#[test]
fn test_hovered_shape_is_outlined_white() {
    let mut session = session_with(&[Shape::new(ShapeId(1), ShapeKind::Square, Pose::at(500.0, 300.0))]);
    let mut renderer = SvgRenderer::new(800, 600);
    session.paint(&mut renderer);

    let outcome = session.pointer_move(Point::new(500.0, 300.0)).unwrap();
    assert!(outcome.redraw);
    assert!(session.paint(&mut renderer));

    let line = renderer
        .document()
        .lines()
        .find(|l| l.contains(r#"data-id="shape-1""#))
        .unwrap();
    assert!(line.contains(r#"stroke="white""#));
}

#[test]
fn test_candidate_is_marked() {
    let mut session = session_with(&[
        Shape::new(ShapeId(1), ShapeKind::Square, Pose::at(500.0, 300.0)),
        Shape::new(ShapeId(2), ShapeKind::Square, Pose::at(650.0, 300.0)),
    ]);
    session.pointer_down(Point::new(500.0, 300.0));
    session.pointer_move(Point::new(510.0, 300.0)).unwrap();

    let mut renderer = SvgRenderer::new(800, 600);
    session.paint(&mut renderer);
    assert!(renderer
        .document()
        .contains(r#"<circle class="snap" cx="600" cy="300""#));
}
