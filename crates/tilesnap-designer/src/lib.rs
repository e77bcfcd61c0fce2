//! # Tilesnap Designer
//!
//! Polygon tiles that can be dragged off a palette, turned by where they
//! are grabbed, and snapped edge to edge against their neighbours.
//!
//! ## Core Components
//!
//! - **Model**: the six tile kinds, their vertex tables, posed shapes and
//!   point-in-polygon hit testing
//! - **Shape store**: the live collection in draw order plus the id generator
//! - **Palette**: one template per kind on the left of the canvas
//! - **Matcher**: nearest facing edge pair within the snap distance
//! - **Snap**: the rigid transform that lays a tile flush against its match
//! - **Drag**: the pointer state machine tying the above together
//! - **Frame / SVG renderer**: coalesced paints and a headless renderer
//! - **Serialization / persistence**: tagged JSON layout and its stores
//!
//! ## Architecture
//!
//! ```text
//! TileSession
//!   ├── DragController
//!   │     ├── Palette
//!   │     ├── ShapeStore (live shapes)
//!   │     └── matcher + snap
//!   ├── LayoutStore (JSON file or memory)
//!   └── FrameScheduler ──> Renderer
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tilesnap_designer::{DragController, Point};
//!
//! let mut controller = DragController::default();
//! // Drag the square template onto the canvas.
//! controller.pointer_down(Point::new(120.0, 100.0));
//! controller.pointer_move(Point::new(400.0, 300.0)).unwrap();
//! let outcome = controller.pointer_up(Point::new(400.0, 300.0)).unwrap();
//! assert!(outcome.added.is_some());
//! assert_eq!(controller.shapes().len(), 1);
//! ```

pub mod drag;
pub mod frame;
pub mod matcher;
pub mod model;
pub mod palette;
pub mod persistence;
pub mod serialization;
pub mod session;
pub mod shape_store;
pub mod snap;
pub mod svg_renderer;

pub use drag::{DragController, DragSource, DragState, DropOutcome, InteractionConfig, MoveOutcome};
pub use frame::{FrameScheduler, RenderFrame, Renderer};
pub use matcher::{find_closest_match, EdgeMatch, MatchConfig, MatchedEdge};
pub use model::{Point, Polygon, Pose, Shape, ShapeId, ShapeKind, WorldEdge, SIDE};
pub use palette::{Palette, PaletteRegion, DEFAULT_PALETTE_BOUNDARY_X};
pub use persistence::{JsonFileStore, LayoutStore, MemoryStore, DEFAULT_LAYOUT_KEY};
pub use serialization::{decode_layout, encode_layout, DecodedLayout, LayoutFile, ShapeRecord};
pub use session::TileSession;
pub use shape_store::{IdGenerator, ShapeStore, MAX_STORED_ID};
pub use snap::apply_match;
pub use svg_renderer::SvgRenderer;
