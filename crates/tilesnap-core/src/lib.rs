//! # Tilesnap Core
//!
//! Core types shared by the tilesnap crates.
//! Provides the 2D point/vector math used for shape poses and the
//! error taxonomy used across the interaction engine.

pub mod error;
pub mod math;

pub use error::{Error, GeometryError, InteractionError, PersistenceError, Result};
pub use math::{angle_between, normalize_angle, Point};
