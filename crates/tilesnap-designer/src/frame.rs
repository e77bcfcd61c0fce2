//! Frame coalescing and the renderer seam.

use crate::matcher::EdgeMatch;
use crate::model::{Shape, ShapeId};

/// Everything a renderer needs to paint one frame. Borrowed from the
/// controller; renderers never mutate shape state.
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame<'a> {
    pub palette: &'a [Shape],
    pub shapes: &'a [Shape],
    pub hover_shape_id: Option<ShapeId>,
    pub dragging_shape_id: Option<ShapeId>,
    /// A live shape is being dragged over the palette and will be removed
    /// if released there.
    pub dragging_onto_palette: bool,
    pub candidate: Option<&'a EdgeMatch>,
    pub palette_boundary_x: f64,
}

impl<'a> RenderFrame<'a> {
    /// The dragged shape, wherever it lives.
    pub fn dragging_shape(&self) -> Option<&'a Shape> {
        let id = self.dragging_shape_id?;
        self.shapes
            .iter()
            .chain(self.palette.iter())
            .find(|s| s.id() == id)
    }
}

pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame<'_>);
}

/// Coalesces any number of frame requests into a single paint.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    pending: bool,
    requests: u64,
    frames: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self) {
        self.pending = true;
        self.requests += 1;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Returns true once per batch of requests.
    pub fn take(&mut self) -> bool {
        if !self.pending {
            return false;
        }
        self.pending = false;
        self.frames += 1;
        true
    }

    pub fn requests(&self) -> u64 {
        self.requests
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
