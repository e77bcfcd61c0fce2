//! SVG renderer for tile frames
//! Paints the same layers as the interactive canvas:
//! - Grey background with live shapes
//! - Palette strip with its divider (white and thicker while a live shape
//!   hovers over it)
//! - Palette templates, then the dragged shape on top of everything

use std::fmt::Write as _;

use lyon::path::Event;

use crate::frame::{RenderFrame, Renderer};
use crate::model::{Point, Shape};

const BACKGROUND: &str = "#ddd";
const PALETTE_FILL: &str = "#aaa";
const OUTLINE_WIDTH: f64 = 4.0;
const CANDIDATE_RADIUS: f64 = 6.0;

/// Convert a shape outline to SVG path data
pub fn outline_path_data(shape: &Shape) -> String {
    let mut data = String::new();
    for event in shape.outline().iter() {
        match event {
            Event::Begin { at } => {
                let _ = write!(data, "M {} {} ", at.x, at.y);
            }
            Event::Line { to, .. } => {
                let _ = write!(data, "L {} {} ", to.x, to.y);
            }
            Event::End { close, .. } => {
                if close {
                    data.push_str("Z ");
                }
            }
            _ => {}
        }
    }
    data.trim_end().to_string()
}

/// Renders each frame into a standalone SVG document.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    width: u32,
    height: u32,
    document: String,
    frames: u64,
}

impl SvgRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            document: String::new(),
            frames: 0,
        }
    }

    /// The most recently rendered document. Empty before the first frame.
    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn push_shape(out: &mut String, shape: &Shape, highlight: bool) {
        let stroke = if highlight { "white" } else { "black" };
        let _ = writeln!(
            out,
            r#"  <path data-id="{}" d="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            shape.id(),
            outline_path_data(shape),
            shape.kind().color(),
            stroke,
            OUTLINE_WIDTH
        );
    }

    fn push_marker(out: &mut String, at: Point) {
        let _ = writeln!(
            out,
            r#"  <circle class="snap" cx="{}" cy="{}" r="{}" fill="none" stroke="white" stroke-dasharray="2 2"/>"#,
            at.x, at.y, CANDIDATE_RADIUS
        );
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame<'_>) {
        let (width, height) = (self.width, self.height);
        let mut out = String::new();

        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );
        let _ = writeln!(
            out,
            r#"  <rect x="0" y="0" width="{width}" height="{height}" fill="{BACKGROUND}"/>"#
        );

        for shape in frame.shapes {
            if Some(shape.id()) == frame.dragging_shape_id {
                continue;
            }
            Self::push_shape(&mut out, shape, frame.hover_shape_id == Some(shape.id()));
        }

        let boundary = frame.palette_boundary_x;
        let (divider, divider_width) = if frame.dragging_onto_palette {
            ("white", 4)
        } else {
            ("black", 2)
        };
        let _ = writeln!(
            out,
            r#"  <rect x="0" y="0" width="{boundary}" height="{height}" fill="{PALETTE_FILL}"/>"#
        );
        let _ = writeln!(
            out,
            r#"  <line x1="{boundary}" y1="0" x2="{boundary}" y2="{height}" stroke="{divider}" stroke-width="{divider_width}"/>"#
        );

        for shape in frame.palette {
            let highlight = frame.hover_shape_id == Some(shape.id())
                || frame.dragging_shape_id == Some(shape.id());
            Self::push_shape(&mut out, shape, highlight);
        }

        if let Some(shape) = frame.dragging_shape() {
            Self::push_shape(&mut out, shape, true);
        }
        if let Some(candidate) = frame.candidate {
            Self::push_marker(&mut out, candidate.fixed.midpoint);
        }

        out.push_str("</svg>\n");
        self.document = out;
        self.frames += 1;
    }
}
