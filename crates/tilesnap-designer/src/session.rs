//! A drag controller bound to a layout store and a frame scheduler.

use tilesnap_core::{Error, InteractionError, Result};
use tracing::{error, info};

use crate::drag::{DragController, DropOutcome, InteractionConfig, MoveOutcome};
use crate::frame::{FrameScheduler, Renderer};
use crate::model::Point;
use crate::persistence::LayoutStore;

/// One interactive tiling session.
///
/// Loads the stored layout on open, persists the live shapes after every
/// drop, and paints at most once per batch of frame requests.
pub struct TileSession {
    controller: DragController,
    store: Box<dyn LayoutStore>,
    frames: FrameScheduler,
    persist: bool,
}

impl TileSession {
    pub fn open(config: InteractionConfig, store: Box<dyn LayoutStore>) -> Result<Self> {
        let shapes = store.load()?;
        info!("Opening session with {} stored shapes", shapes.len());
        let mut frames = FrameScheduler::new();
        frames.request();

        Ok(Self {
            controller: DragController::with_shapes(config, shapes),
            store,
            frames,
            persist: true,
        })
    }

    /// Disables or re-enables saving on drop.
    pub fn set_persist(&mut self, persist: bool) {
        self.persist = persist;
    }

    pub fn controller(&self) -> &DragController {
        &self.controller
    }

    pub fn frames(&self) -> &FrameScheduler {
        &self.frames
    }

    pub fn pointer_down(&mut self, pos: Point) {
        let abandoning = self.controller.state().is_dragging();
        self.controller.pointer_down(pos);
        if abandoning {
            self.frames.request();
        }
    }

    pub fn pointer_move(&mut self, pos: Point) -> Result<MoveOutcome> {
        let outcome = self.controller.pointer_move(pos).map_err(report)?;
        if outcome.redraw {
            self.frames.request();
        }
        Ok(outcome)
    }

    pub fn pointer_up(&mut self, pos: Point) -> Result<DropOutcome> {
        let outcome = self.controller.pointer_up(pos).map_err(report)?;
        if outcome.layout_changed {
            if self.persist {
                self.save()?;
            }
            self.frames.request();
        }
        Ok(outcome)
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save(self.controller.shapes().as_slice())?;
        Ok(())
    }

    /// Removes every live shape, in memory and in the store.
    pub fn clear(&mut self) -> Result<()> {
        self.controller.clear_shapes();
        self.store.clear()?;
        self.frames.request();
        Ok(())
    }

    /// Renders if a frame is pending. Returns true if it painted.
    pub fn paint(&mut self, renderer: &mut dyn Renderer) -> bool {
        if !self.frames.take() {
            return false;
        }
        renderer.render(&self.controller.render_frame());
        true
    }
}

fn report(e: InteractionError) -> Error {
    let e = Error::from(e);
    if e.is_fatal() {
        error!("Drag controller invariant broken: {}", e);
    }
    e
}
