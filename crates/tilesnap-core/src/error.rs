//! Error handling for tilesnap
//!
//! Provides the error types for every layer of the interaction engine:
//! - Geometry errors (shape construction contracts)
//! - Interaction errors (drag state machine invariants)
//! - Persistence errors (stored layout decoding)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Raised when a vertex table violates the construction-time contract of
/// a polygon shape. Shape kinds shipped with the crate never produce these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A polygon needs at least three vertices
    #[error("Polygon needs at least 3 vertices, got {count}")]
    TooFewVertices {
        /// Number of vertices supplied.
        count: usize,
    },

    /// Two consecutive vertices coincide
    #[error("Edge {index} has zero length")]
    DegenerateEdge {
        /// Index of the edge's first vertex.
        index: usize,
    },

    /// Vertices are wound against the hit-test convention
    #[error("Vertices are wound against the hit-test convention (signed area {area})")]
    InvertedWinding {
        /// Shoelace signed area of the rejected vertex list.
        area: f64,
    },
}

/// Interaction error type
///
/// Represents violations of the drag controller's state machine. A
/// `MissingDragState` means the controller itself is broken and is never
/// recovered from.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InteractionError {
    /// Dragging without the cached pointer or grab state
    #[error("Drag in progress but {what} is missing")]
    MissingDragState {
        /// The piece of state that was missing.
        what: &'static str,
    },

    /// A shape id does not refer to any live or palette shape
    #[error("Unknown shape id {id}")]
    UnknownShape {
        /// The shape id that was looked up.
        id: u64,
    },

    /// A snap was applied to a shape other than the match's moving shape
    #[error("Match belongs to shape {expected} but was applied to shape {actual}")]
    MatchShapeMismatch {
        /// Moving shape recorded in the match.
        expected: u64,
        /// Shape the match was applied to.
        actual: u64,
    },
}

/// Persistence error type
///
/// Represents failures while reading or writing the stored tile layout.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// A stored record carries a kind tag no shape kind answers to
    #[error("Unknown shape kind '{tag}'")]
    UnknownKind {
        /// The unrecognized tag.
        tag: String,
    },

    /// I/O error while accessing the layout file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encode/decode error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main error type for tilesnap
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Interaction error
    #[error(transparent)]
    Interaction(#[from] InteractionError),

    /// Persistence error
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl Error {
    /// Check if this error signals a broken internal invariant
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Interaction(InteractionError::MissingDragState { .. })
                | Error::Interaction(InteractionError::MatchShapeMismatch { .. })
                | Error::Geometry(_)
        )
    }
}

/// Result type for tilesnap operations
pub type Result<T> = std::result::Result<T, Error>;
