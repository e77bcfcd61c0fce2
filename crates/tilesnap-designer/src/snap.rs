//! Rigid transform that lays a dragged shape flush against its match.

use tilesnap_core::{normalize_angle, InteractionError};

use crate::matcher::EdgeMatch;
use crate::model::Shape;

/// Rotates `shape` so its matched edge faces the fixed edge, then slides it
/// so the two edge midpoints coincide.
///
/// The moving midpoint is recomputed after rotating; the one stored in the
/// match is stale by then.
pub fn apply_match(shape: &mut Shape, matched: &EdgeMatch) -> Result<(), InteractionError> {
    if shape.id() != matched.moving.shape_id {
        return Err(InteractionError::MatchShapeMismatch {
            expected: matched.moving.shape_id.0,
            actual: shape.id().0,
        });
    }

    let fixed_angle = matched.fixed.normal.angle();
    let moving_angle = (-matched.moving.normal).angle();
    shape.rotate_by(fixed_angle - moving_angle);
    shape.pose.rotation = normalize_angle(shape.pose.rotation);

    let edge = shape
        .world_edge(matched.moving.edge_index)
        .ok_or(InteractionError::UnknownShape {
            id: matched.moving.shape_id.0,
        })?;
    shape.translate(matched.fixed.midpoint - edge.midpoint);

    Ok(())
}
