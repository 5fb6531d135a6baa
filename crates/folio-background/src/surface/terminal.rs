//! Terminal cell surface for ratatui.

use folio_core::{Rgb, Rgba, Vec2};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Surface;
use crate::chars::DOT_CHARS;

/// Radius at or above which the largest glyph is used.
const LARGE_RADIUS: f32 = 2.4;
/// Radius at or above which the medium glyph is used.
const MEDIUM_RADIUS: f32 = 1.7;

/// A dot occupying one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Dot {
    glyph: char,
    color: Rgb,
    alpha: f32,
}

/// Maps a pixel-space surface onto a grid of terminal cells.
///
/// Every cell covers `cell_width` x `cell_height` pixels. Each circle marks
/// the cell holding its center; when two dots share a cell the more opaque
/// one is kept.
#[derive(Debug, Clone)]
pub struct TerminalCanvas {
    /// Surface width in pixels.
    width: u32,
    /// Surface height in pixels.
    height: u32,
    /// Pixel width of one cell.
    cell_width: u32,
    /// Pixel height of one cell.
    cell_height: u32,
    /// Color dots are blended over.
    background: Rgb,
    /// Number of cell columns.
    cols: u16,
    /// Number of cell rows.
    rows: u16,
    /// Row-major cell contents.
    cells: Vec<Option<Dot>>,
}

impl TerminalCanvas {
    /// Create an empty canvas with the given cell size in pixels.
    pub fn new(cell_width: u32, cell_height: u32, background: Rgb) -> Self {
        Self {
            width: 0,
            height: 0,
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
            background,
            cols: 0,
            rows: 0,
            cells: Vec::new(),
        }
    }

    /// Grid size as `(cols, rows)`.
    pub fn grid(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    /// Pixel size of a terminal area in this canvas' cell units.
    pub fn pixel_size(&self, cols: u16, rows: u16) -> (u32, u32) {
        (cols as u32 * self.cell_width, rows as u32 * self.cell_height)
    }

    /// Glyph and color at a cell, if a dot was drawn there.
    pub fn dot_at(&self, col: u16, row: u16) -> Option<(char, Rgb)> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells[row as usize * self.cols as usize + col as usize].map(|d| (d.glyph, d.color))
    }

    /// Build one line of spans per cell row.
    pub fn lines(&self) -> Vec<Line<'static>> {
        if self.cols == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.cols as usize)
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|cell| match cell {
                        Some(dot) => {
                            Span::styled(dot.glyph.to_string(), Style::new().fg(dot.color.color()))
                        }
                        None => Span::raw(" "),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    /// Render the canvas into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.lines()), area);
    }
}

impl Surface for TerminalCanvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.cols = width.div_ceil(self.cell_width).min(u16::MAX as u32) as u16;
        self.rows = height.div_ceil(self.cell_height).min(u16::MAX as u32) as u16;
        self.cells = vec![None; self.cols as usize * self.rows as usize];
    }

    fn clear(&mut self) {
        self.cells.fill(None);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if radius <= 0.0 || center.x < 0.0 || center.y < 0.0 {
            return;
        }
        let col = (center.x / self.cell_width as f32) as usize;
        let row = (center.y / self.cell_height as f32) as usize;
        if col >= self.cols as usize || row >= self.rows as usize {
            return;
        }

        let glyph = if radius >= LARGE_RADIUS {
            DOT_CHARS[2]
        } else if radius >= MEDIUM_RADIUS {
            DOT_CHARS[1]
        } else {
            DOT_CHARS[0]
        };
        let dot = Dot {
            glyph,
            color: color.over(self.background),
            alpha: color.alpha,
        };

        let cell = &mut self.cells[row * self.cols as usize + col];
        if cell.is_none_or(|existing| existing.alpha < dot.alpha) {
            *cell = Some(dot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgb = Rgb::new(0, 0, 0);

    #[test]
    fn test_resize_rounds_up_to_cells() {
        let mut canvas = TerminalCanvas::new(8, 16, BG);
        canvas.resize(81, 32);
        assert_eq!(canvas.grid(), (11, 2));
        assert_eq!(canvas.lines().len(), 2);
        assert_eq!(canvas.pixel_size(10, 2), (80, 32));
    }

    #[test]
    fn test_dot_lands_in_cell_of_center() {
        let mut canvas = TerminalCanvas::new(8, 16, BG);
        canvas.resize(80, 48);
        canvas.fill_circle(Vec2::new(17.0, 20.0), 2.5, Rgb::new(200, 100, 50).with_alpha(1.0));
        assert_eq!(canvas.dot_at(2, 1), Some(('●', Rgb::new(200, 100, 50))));
        assert_eq!(canvas.dot_at(0, 0), None);
    }

    #[test]
    fn test_glyph_by_radius_and_opacity_blend() {
        let mut canvas = TerminalCanvas::new(1, 1, BG);
        canvas.resize(3, 1);
        let white = Rgb::new(255, 255, 255);
        canvas.fill_circle(Vec2::new(0.5, 0.5), 1.0, white.with_alpha(0.5));
        canvas.fill_circle(Vec2::new(1.5, 0.5), 2.0, white.with_alpha(0.5));
        canvas.fill_circle(Vec2::new(2.5, 0.5), 3.0, white.with_alpha(0.5));
        assert_eq!(canvas.dot_at(0, 0), Some(('·', Rgb::new(128, 128, 128))));
        assert_eq!(canvas.dot_at(1, 0).map(|d| d.0), Some('•'));
        assert_eq!(canvas.dot_at(2, 0).map(|d| d.0), Some('●'));
    }

    #[test]
    fn test_brightest_dot_wins() {
        let mut canvas = TerminalCanvas::new(8, 16, BG);
        canvas.resize(8, 16);
        let c = Rgb::new(100, 100, 100);
        canvas.fill_circle(Vec2::new(1.0, 1.0), 1.0, c.with_alpha(0.8));
        canvas.fill_circle(Vec2::new(2.0, 2.0), 3.0, c.with_alpha(0.3));
        assert_eq!(canvas.dot_at(0, 0).map(|d| d.0), Some('·'));
    }

    #[test]
    fn test_clear_and_out_of_bounds() {
        let mut canvas = TerminalCanvas::new(8, 16, BG);
        canvas.resize(16, 16);
        canvas.fill_circle(Vec2::new(100.0, 1.0), 2.0, BG.with_alpha(1.0));
        canvas.fill_circle(Vec2::new(-1.0, 1.0), 2.0, BG.with_alpha(1.0));
        canvas.fill_circle(Vec2::new(9.0, 1.0), 2.0, BG.with_alpha(1.0));
        assert!(canvas.dot_at(1, 0).is_some());
        canvas.clear();
        assert!(canvas.dot_at(1, 0).is_none());
    }

    #[test]
    fn test_empty_canvas_has_no_lines() {
        let mut canvas = TerminalCanvas::new(8, 16, BG);
        canvas.resize(0, 0);
        assert!(canvas.lines().is_empty());
        canvas.fill_circle(Vec2::ZERO, 1.0, BG.with_alpha(1.0));
    }
}
