use crate::matcher::MatchConfig;
use crate::model::{Point, ShapeId};
use crate::palette::DEFAULT_PALETTE_BOUNDARY_X;

/// Which collection the dragged shape came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    /// A palette template. It only becomes a live shape when dropped on
    /// the canvas.
    Palette,
    Live,
}

/// Pointer state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Button held but the pointer has not yet moved past the threshold.
    PointerDown {
        origin: Point,
        target: Option<(ShapeId, DragSource)>,
    },
    Dragging {
        shape: ShapeId,
        source: DragSource,
        /// The grabbed material point in the shape's local frame.
        grab_local: Point,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn dragging_shape(&self) -> Option<ShapeId> {
        match self {
            DragState::Dragging { shape, .. } => Some(*shape),
            _ => None,
        }
    }
}

/// Interaction constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionConfig {
    pub palette_boundary_x: f64,
    /// Per-axis pointer travel, in pixels, before a press becomes a drag.
    pub drag_threshold: f64,
    pub matching: MatchConfig,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            palette_boundary_x: DEFAULT_PALETTE_BOUNDARY_X,
            drag_threshold: 4.0,
            matching: MatchConfig::default(),
        }
    }
}

/// What a pointer move changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Something visible changed and a frame should be requested.
    pub redraw: bool,
    pub drag_started: bool,
    pub candidate_changed: bool,
}

/// What a pointer release changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropOutcome {
    /// Live shape dropped back onto the palette.
    pub removed: Option<ShapeId>,
    /// Live shape created from a palette template.
    pub added: Option<ShapeId>,
    pub snapped: bool,
    /// A drag ended and the live collection should be persisted.
    pub layout_changed: bool,
}
