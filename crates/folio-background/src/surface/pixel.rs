//! In-memory RGBA raster.

use folio_core::{Rgba, Vec2};

use super::Surface;

/// An RGBA8 pixel buffer with straight alpha and source-over blending.
#[derive(Debug, Clone, Default)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl PixelCanvas {
    /// Create a transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 4]; width as usize * height as usize],
        }
    }

    /// Pixel at `(x, y)`, `None` when outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    /// Row-major pixel data.
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Number of pixels with non-zero alpha.
    pub fn painted_pixels(&self) -> usize {
        self.pixels.iter().filter(|p| p[3] > 0).count()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn blend(&mut self, x: u32, y: u32, color: Rgba) {
        let idx = self.index(x, y);
        let dst = self.pixels[idx];
        let sa = color.alpha;
        let da = dst[3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return;
        }
        let channel = |src: u8, dst: u8| {
            ((src as f32 * sa + dst as f32 * da * (1.0 - sa)) / out_a).round() as u8
        };
        self.pixels[idx] = [
            channel(color.rgb.r, dst[0]),
            channel(color.rgb.g, dst[1]),
            channel(color.rgb.b, dst[2]),
            (out_a * 255.0).round() as u8,
        ];
    }
}

impl Surface for PixelCanvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    fn clear(&mut self) {
        self.pixels.fill([0; 4]);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if radius <= 0.0 || self.width == 0 || self.height == 0 {
            return;
        }

        let x0 = (center.x - radius).floor().clamp(0.0, self.width as f32) as u32;
        let x1 = (center.x + radius).ceil().clamp(0.0, self.width as f32) as u32;
        let y0 = (center.y - radius).floor().clamp(0.0, self.height as f32) as u32;
        let y1 = (center.y + radius).ceil().clamp(0.0, self.height as f32) as u32;
        let r2 = radius * radius;

        for y in y0..y1 {
            let dy = y as f32 + 0.5 - center.y;
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - center.x;
                if dx * dx + dy * dy <= r2 {
                    self.blend(x, y, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Rgb;

    #[test]
    fn test_fill_circle_covers_center() {
        let mut canvas = PixelCanvas::new(10, 10);
        canvas.fill_circle(Vec2::new(5.0, 5.0), 2.0, Rgb::new(102, 126, 234).with_alpha(1.0));
        assert_eq!(canvas.pixel(5, 5), Some([102, 126, 234, 255]));
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0, 0]));
        assert!(canvas.painted_pixels() >= 4);
    }

    #[test]
    fn test_alpha_is_stored() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.fill_circle(Vec2::new(2.0, 2.0), 1.0, Rgb::new(255, 0, 0).with_alpha(0.5));
        assert_eq!(canvas.pixel(1, 1), Some([255, 0, 0, 128]));
    }

    #[test]
    fn test_clear_erases() {
        let mut canvas = PixelCanvas::new(8, 8);
        canvas.fill_circle(Vec2::new(4.0, 4.0), 3.0, Rgb::new(1, 2, 3).with_alpha(0.8));
        canvas.clear();
        assert_eq!(canvas.painted_pixels(), 0);
    }

    #[test]
    fn test_circle_is_clipped_at_edges() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.fill_circle(Vec2::new(-1.0, -1.0), 3.0, Rgb::new(9, 9, 9).with_alpha(1.0));
        canvas.fill_circle(Vec2::new(10.0, 10.0), 3.0, Rgb::new(9, 9, 9).with_alpha(1.0));
        assert_eq!(canvas.pixel(0, 0), Some([9, 9, 9, 255]));
        assert_eq!(canvas.pixel(3, 3), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_resize_and_zero_size() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.resize(0, 0);
        assert_eq!(canvas.size(), (0, 0));
        canvas.fill_circle(Vec2::ZERO, 2.0, Rgb::new(1, 1, 1).with_alpha(1.0));
        assert_eq!(canvas.pixel(0, 0), None);
        canvas.resize(3, 2);
        assert_eq!(canvas.pixels().len(), 6);
    }
}
