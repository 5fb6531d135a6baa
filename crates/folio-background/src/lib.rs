//! Particle field background for the folio portfolio.
//!
//! A fixed pool of translucent dots drifts across the viewport and is
//! redrawn every frame onto a [`Surface`]. Two surfaces are provided: an
//! RGBA [`PixelCanvas`] and a [`TerminalCanvas`] that maps pixel space onto
//! terminal cells for ratatui.

mod chars;
mod color;
mod field;
mod surface;

pub use color::{hsl_to_rgb, hue_rotate, rgb_to_hsl};
pub use field::{Particle, ParticleField};
pub use surface::{PixelCanvas, Surface, TerminalCanvas};
