//! Nearest opposing-edge search between a dragged shape and its neighbours.

use std::f64::consts::PI;

use tilesnap_core::angle_between;

use crate::model::{Point, Shape, ShapeId};

/// Thresholds for accepting an edge pair as a snap candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
    /// Midpoints must be strictly closer than this.
    pub max_distance: f64,
    /// Normals must differ in angle by strictly more than this (radians).
    pub min_opposing_angle: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_distance: 50.0,
            min_opposing_angle: 3.0 * PI / 4.0,
        }
    }
}

/// One side of a match, captured in world space at the time of the search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchedEdge {
    pub shape_id: ShapeId,
    pub edge_index: usize,
    pub midpoint: Point,
    pub normal: Point,
}

/// A proposed snap: `moving` belongs to the dragged shape, `fixed` to the
/// neighbour it would attach to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeMatch {
    pub fixed: MatchedEdge,
    pub moving: MatchedEdge,
}

impl EdgeMatch {
    pub fn distance_squared(&self) -> f64 {
        self.moving.midpoint.distance_squared(self.fixed.midpoint)
    }
}

/// Finds the closest pair of facing edges between `subject` and any other
/// shape in `candidates`.
///
/// Shapes are scanned in iteration order, then each candidate edge against
/// each subject edge. On an exact distance tie the first pair found wins.
pub fn find_closest_match<'a>(
    subject: &Shape,
    candidates: impl IntoIterator<Item = &'a Shape>,
    config: &MatchConfig,
) -> Option<EdgeMatch> {
    let subject_edges = subject.world_edges();
    let mut best: Option<(f64, EdgeMatch)> = None;

    for other in candidates {
        if other.id() == subject.id() {
            continue;
        }
        for (fixed_index, fixed) in other.world_edges().iter().enumerate() {
            for (moving_index, moving) in subject_edges.iter().enumerate() {
                let diff = angle_between(fixed.normal, moving.normal);
                if diff.abs() <= config.min_opposing_angle {
                    continue;
                }

                let distance_sq = fixed.midpoint.distance_squared(moving.midpoint);
                if best.as_ref().is_some_and(|(d, _)| distance_sq >= *d) {
                    continue;
                }

                best = Some((
                    distance_sq,
                    EdgeMatch {
                        fixed: MatchedEdge {
                            shape_id: other.id(),
                            edge_index: fixed_index,
                            midpoint: fixed.midpoint,
                            normal: fixed.normal,
                        },
                        moving: MatchedEdge {
                            shape_id: subject.id(),
                            edge_index: moving_index,
                            midpoint: moving.midpoint,
                            normal: moving.normal,
                        },
                    },
                ));
            }
        }
    }

    let max_sq = config.max_distance * config.max_distance;
    best.filter(|(d, _)| *d < max_sq).map(|(_, m)| m)
}
