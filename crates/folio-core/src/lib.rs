//! Core types shared by the folio crates.
//!
//! Geometry, colors and the tunable particle field parameters live here so
//! that the configuration layer, the background renderer and the page
//! effects agree on a single vocabulary.

mod color;
mod geometry;
mod params;

pub use color::{ParseColorError, Rgb, Rgba};
pub use geometry::{Rect, Vec2};
pub use params::{FieldParams, MotionPreference, Range};
