//! Pointer-driven drag, rotate and drop of tiles.
//!
//! A press selects the topmost shape under the pointer, from the live
//! collection when the pointer is right of the palette boundary and from
//! the palette otherwise. Once the pointer travels past the drag threshold
//! the shape follows it, turning about the grabbed point in proportion to
//! the tangential part of the motion. Every move recomputes the snap
//! candidate against the live shapes; release applies it.

mod types;

pub use types::{DragSource, DragState, DropOutcome, InteractionConfig, MoveOutcome};

use tilesnap_core::{normalize_angle, InteractionError};
use tracing::debug;

use crate::frame::RenderFrame;
use crate::matcher::{find_closest_match, EdgeMatch};
use crate::model::{Point, Shape, ShapeId};
use crate::palette::{Palette, PaletteRegion};
use crate::shape_store::{IdGenerator, ShapeStore};
use crate::snap::apply_match;

/// Owns the palette, the live shapes and the pointer state.
#[derive(Debug, Clone)]
pub struct DragController {
    config: InteractionConfig,
    ids: IdGenerator,
    palette: Palette,
    shapes: ShapeStore,
    state: DragState,
    candidate: Option<EdgeMatch>,
    hover: Option<ShapeId>,
    pointer: Option<Point>,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(InteractionConfig::default())
    }
}

impl DragController {
    pub fn new(config: InteractionConfig) -> Self {
        Self::with_shapes(config, Vec::new())
    }

    /// Starts from an existing live collection, e.g. a loaded layout.
    /// Ids handed out afterwards never collide with the loaded ones.
    pub fn with_shapes(config: InteractionConfig, shapes: Vec<Shape>) -> Self {
        let shapes = ShapeStore::from_shapes(shapes);
        let mut ids = IdGenerator::new();
        if let Some(max) = shapes.max_id() {
            ids.set_next_id(max.0.saturating_add(1));
        }
        let palette = Palette::new(&mut ids);

        Self {
            config,
            ids,
            palette,
            shapes,
            state: DragState::Idle,
            candidate: None,
            hover: None,
            pointer: None,
        }
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn shapes(&self) -> &ShapeStore {
        &self.shapes
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn candidate(&self) -> Option<&EdgeMatch> {
        self.candidate.as_ref()
    }

    pub fn hover_shape_id(&self) -> Option<ShapeId> {
        self.hover
    }

    pub fn dragging_shape_id(&self) -> Option<ShapeId> {
        self.state.dragging_shape()
    }

    fn region(&self) -> PaletteRegion {
        PaletteRegion::new(self.config.palette_boundary_x)
    }

    /// Removes every live shape. Any drag in progress is abandoned.
    pub fn clear_shapes(&mut self) {
        self.shapes.clear();
        self.state = DragState::Idle;
        self.candidate = None;
        self.hover = None;
        self.palette.regenerate(&mut self.ids);
    }

    /// Starts a press. A drag still in progress is abandoned where it is,
    /// and a palette template it had moved goes back home.
    pub fn pointer_down(&mut self, pos: Point) {
        self.pointer = Some(pos);
        if let DragState::Dragging { shape, source, .. } = self.state {
            debug!(%shape, ?source, "drag abandoned");
            if source == DragSource::Palette {
                self.palette.regenerate(&mut self.ids);
            }
        }
        self.candidate = None;
        let target = self.hit_test(pos);
        debug!(x = pos.x, y = pos.y, ?target, "pointer down");
        self.state = DragState::PointerDown {
            origin: pos,
            target,
        };
    }

    pub fn pointer_move(&mut self, pos: Point) -> Result<MoveOutcome, InteractionError> {
        self.pointer = Some(pos);
        let mut outcome = MoveOutcome::default();

        match self.state {
            DragState::Idle => {
                outcome.redraw = self.update_hover(pos);
            }
            DragState::PointerDown { origin, target } => {
                let travel = pos - origin;
                let threshold = self.config.drag_threshold;
                let past_threshold = travel.x.abs() > threshold || travel.y.abs() > threshold;

                match target {
                    Some((id, source)) if past_threshold => {
                        self.begin_drag(id, source, origin)?;
                        outcome.drag_started = true;
                        outcome.candidate_changed = self.drag_to(pos)?;
                        outcome.redraw = true;
                    }
                    _ => {
                        outcome.redraw = self.update_hover(pos);
                    }
                }
            }
            DragState::Dragging { .. } => {
                outcome.candidate_changed = self.drag_to(pos)?;
                outcome.redraw = true;
            }
        }

        Ok(outcome)
    }

    pub fn pointer_up(&mut self, pos: Point) -> Result<DropOutcome, InteractionError> {
        self.pointer = Some(pos);
        let state = std::mem::take(&mut self.state);

        let DragState::Dragging { shape, source, .. } = state else {
            return Ok(DropOutcome::default());
        };

        let mut outcome = DropOutcome {
            layout_changed: true,
            ..DropOutcome::default()
        };

        if let Some(matched) = self.candidate.take() {
            apply_match(self.dragged_shape_mut(shape, source)?, &matched)?;
            outcome.snapped = true;
        }

        let region = self.region();
        match source {
            DragSource::Live if region.contains(pos) => {
                self.shapes.remove(shape);
                if self.hover == Some(shape) {
                    self.hover = None;
                }
                outcome.removed = Some(shape);
            }
            DragSource::Palette if region.canvas_contains(pos) => {
                let id = self.ids.generate_id();
                let clone = self
                    .palette
                    .get(shape)
                    .map(|s| s.duplicate(id))
                    .ok_or(InteractionError::MissingDragState {
                        what: "dragged palette shape",
                    })?;
                self.shapes.insert(clone);
                self.hover = Some(id);
                outcome.added = Some(id);
            }
            _ => {}
        }

        self.palette.regenerate(&mut self.ids);
        debug!(
            %shape,
            ?source,
            snapped = outcome.snapped,
            removed = outcome.removed.is_some(),
            added = ?outcome.added,
            "drag ended"
        );
        Ok(outcome)
    }

    /// Renderer input for the current state.
    pub fn render_frame(&self) -> RenderFrame<'_> {
        let dragging = self.state.dragging_shape();
        let dragging_live = matches!(
            self.state,
            DragState::Dragging {
                source: DragSource::Live,
                ..
            }
        );
        let dragging_onto_palette =
            dragging_live && self.pointer.is_some_and(|p| self.region().contains(p));

        RenderFrame {
            palette: self.palette.shapes(),
            shapes: self.shapes.as_slice(),
            hover_shape_id: if dragging.is_some() { None } else { self.hover },
            dragging_shape_id: dragging,
            dragging_onto_palette,
            candidate: self.candidate.as_ref(),
            palette_boundary_x: self.config.palette_boundary_x,
        }
    }

    fn hit_test(&self, pos: Point) -> Option<(ShapeId, DragSource)> {
        if self.region().canvas_contains(pos) {
            self.shapes.topmost_hit(pos).map(|id| (id, DragSource::Live))
        } else {
            self.palette
                .topmost_hit(pos)
                .map(|id| (id, DragSource::Palette))
        }
    }

    /// Returns true when the hover target changed.
    fn update_hover(&mut self, pos: Point) -> bool {
        let hover = self.hit_test(pos).map(|(id, _)| id);
        let changed = hover != self.hover;
        self.hover = hover;
        changed
    }

    fn begin_drag(
        &mut self,
        id: ShapeId,
        source: DragSource,
        origin: Point,
    ) -> Result<(), InteractionError> {
        if source == DragSource::Live {
            self.shapes.bring_to_front(id);
        }
        let grab_local = self.dragged_shape_mut(id, source)?.to_local_point(origin);
        self.state = DragState::Dragging {
            shape: id,
            source,
            grab_local,
        };
        self.hover = None;
        debug!(shape = %id, ?source, "drag started");
        Ok(())
    }

    fn dragged_shape_mut(
        &mut self,
        id: ShapeId,
        source: DragSource,
    ) -> Result<&mut Shape, InteractionError> {
        let shape = match source {
            DragSource::Palette => self.palette.get_mut(id),
            DragSource::Live => self.shapes.get_mut(id),
        };
        shape.ok_or(InteractionError::MissingDragState {
            what: "dragged shape",
        })
    }

    /// Moves the dragged shape under `pointer` and refreshes the snap
    /// candidate. Returns true when the candidate changed.
    fn drag_to(&mut self, pointer: Point) -> Result<bool, InteractionError> {
        let DragState::Dragging {
            shape: id,
            source,
            grab_local,
        } = self.state
        else {
            return Err(InteractionError::MissingDragState {
                what: "drag state",
            });
        };

        let shape = self.dragged_shape_mut(id, source)?;
        follow_pointer(shape, grab_local, pointer);
        let subject = shape.clone();

        let candidate = find_closest_match(&subject, self.shapes.iter(), &self.config.matching);
        let changed = candidate != self.candidate;
        if changed {
            match &candidate {
                Some(m) => debug!(
                    fixed = %m.fixed.shape_id,
                    fixed_edge = m.fixed.edge_index,
                    moving_edge = m.moving.edge_index,
                    "snap candidate"
                ),
                None => debug!("snap candidate cleared"),
            }
        }
        self.candidate = candidate;
        Ok(changed)
    }
}

/// Turns the shape about its centre by the tangential part of the pull on
/// the grabbed point, then translates so the grabbed point lands exactly
/// under the pointer.
fn follow_pointer(shape: &mut Shape, grab_local: Point, pointer: Point) {
    let grab_world = shape.to_world_point(grab_local);
    let delta = pointer - grab_world;
    let moment = grab_world - shape.position();
    let turn = delta.cross(moment) / shape.max_radius_squared();
    shape.rotate_by(-turn);
    shape.pose.rotation = normalize_angle(shape.pose.rotation);

    let grab_world = shape.to_world_point(grab_local);
    shape.translate(pointer - grab_world);
}
