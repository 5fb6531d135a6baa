//! Drawing surfaces the particle field renders onto.

mod pixel;
mod terminal;

use folio_core::{Rgba, Vec2};

pub use pixel::PixelCanvas;
pub use terminal::TerminalCanvas;

/// A 2D raster target with a mutable pixel size.
pub trait Surface {
    /// Current size in pixels as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Change the pixel size. Existing contents are discarded.
    fn resize(&mut self, width: u32, height: u32);

    /// Erase every pixel.
    fn clear(&mut self);

    /// Fill a circle centered at `center` with the given color.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}
