//! Page layout in page pixels.
//!
//! The page is a vertical list of one-row blocks grouped into sections.
//! Each row is `row_height` pixels tall, so section offsets and heights use
//! the same units as the scroll thresholds of the effects crate.

use folio_config::Profile;
use folio_core::{Rect, Vec2};
use folio_effects::nav::SectionBounds;
use folio_fonts::{GLYPH_HEIGHT, build_banner, is_supported};

/// Rows taken by the navigation bar above the content.
pub const NAV_ROWS: u16 = 2;

/// Left margin of the content in columns.
pub const INDENT: u16 = 4;

/// Columns reserved for each stat counter.
pub const STAT_COLUMN_WIDTH: u16 = 24;

/// Widest a card is drawn, in columns.
pub const MAX_CARD_WIDTH: u16 = 64;

/// Gap between inline items (skills, memory blocks).
const ITEM_GAP: u16 = 2;

/// Row of a bordered card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardRow {
    Top,
    Title(String),
    Text(String),
    Bottom,
}

/// One row of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Blank,
    Greeting,
    Name,
    Tagline,
    /// One row of the stat counter banners.
    StatBanner(usize),
    StatLabels,
    Heading(String),
    AboutCard(CardRow),
    Skills,
    MemoryBlocks,
    Project { index: usize, row: CardRow },
    Link(usize),
    Footer,
}

/// A named, anchorable run of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    /// First row of the section.
    pub start: usize,
    /// Number of rows.
    pub len: usize,
    /// Whether the section fades in on first view.
    pub reveal: bool,
}

/// Element under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hover {
    AboutCard(Rect),
    Project(usize, Rect),
    Skill(usize),
    Memory(usize),
}

/// The laid out page.
#[derive(Debug, Clone)]
pub struct Page {
    blocks: Vec<Block>,
    sections: Vec<Section>,
    row_height: f32,
    col_width: f32,
    skill_columns: Vec<(u16, u16)>,
    memory_columns: Vec<(u16, u16)>,
}

/// Start column and width of each inline item rendered as `[ label ]`.
pub fn item_columns(labels: &[String]) -> Vec<(u16, u16)> {
    let mut x = INDENT;
    labels
        .iter()
        .map(|label| {
            let width = label.chars().count() as u16 + 4;
            let start = x;
            x = x.saturating_add(width + ITEM_GAP);
            (start, width)
        })
        .collect()
}

impl Page {
    /// Lay out `profile` with cells of `col_width` x `row_height` pixels.
    pub fn build(profile: &Profile, col_width: u32, row_height: u32) -> Self {
        let mut page = Self {
            blocks: Vec::new(),
            sections: Vec::new(),
            row_height: row_height.max(1) as f32,
            col_width: col_width.max(1) as f32,
            skill_columns: item_columns(&profile.skills),
            memory_columns: item_columns(&profile.memory_blocks),
        };

        page.section("home", "Home", false, |b| {
            b.extend([Block::Blank, Block::Greeting, Block::Name, Block::Tagline, Block::Blank]);
            if !profile.stats.is_empty() {
                b.extend((0..GLYPH_HEIGHT).map(Block::StatBanner));
                b.push(Block::StatLabels);
            }
            b.extend([Block::Blank, Block::Blank]);
        });

        page.section("about", "About", true, |b| {
            b.push(Block::Heading("About".to_string()));
            b.push(Block::AboutCard(CardRow::Top));
            b.extend(profile.about.iter().cloned().map(|p| Block::AboutCard(CardRow::Text(p))));
            b.push(Block::AboutCard(CardRow::Bottom));
            b.push(Block::Blank);
        });

        page.section("skills", "Skills", true, |b| {
            b.push(Block::Heading("Skills".to_string()));
            b.extend([Block::Skills, Block::Blank, Block::MemoryBlocks, Block::Blank]);
        });

        page.section("projects", "Projects", true, |b| {
            b.push(Block::Heading("Projects".to_string()));
            for (index, project) in profile.projects.iter().enumerate() {
                let mut rows = vec![
                    CardRow::Top,
                    CardRow::Title(project.title.clone()),
                    CardRow::Text(project.description.clone()),
                ];
                if !project.tags.is_empty() {
                    rows.push(CardRow::Text(project.tags.join(" · ")));
                }
                rows.push(CardRow::Bottom);
                b.extend(rows.into_iter().map(|row| Block::Project { index, row }));
                b.push(Block::Blank);
            }
        });

        page.section("contact", "Contact", true, |b| {
            b.push(Block::Heading("Contact".to_string()));
            b.extend((0..profile.links.len()).map(Block::Link));
            b.extend([Block::Blank, Block::Footer, Block::Blank]);
        });

        page
    }

    fn section(
        &mut self,
        id: &'static str,
        title: &'static str,
        reveal: bool,
        fill: impl FnOnce(&mut Vec<Block>),
    ) {
        let start = self.blocks.len();
        fill(&mut self.blocks);
        self.sections.push(Section {
            id,
            title,
            start,
            len: self.blocks.len() - start,
            reveal,
        });
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    /// Total page height in pixels.
    pub fn height(&self) -> f32 {
        self.blocks.len() as f32 * self.row_height
    }

    /// Section offsets for nav highlighting and anchor scrolling.
    pub fn section_bounds(&self) -> Vec<SectionBounds> {
        self.sections
            .iter()
            .map(|s| {
                SectionBounds::new(
                    s.id,
                    s.start as f32 * self.row_height,
                    s.len as f32 * self.row_height,
                )
            })
            .collect()
    }

    /// Section containing `row`.
    pub fn section_of(&self, row: usize) -> Option<usize> {
        self.sections
            .iter()
            .position(|s| row >= s.start && row < s.start + s.len)
    }

    /// Rectangle of a section in page pixels.
    pub fn section_rect(&self, index: usize, width_px: f32) -> Option<Rect> {
        let s = self.sections.get(index)?;
        Some(self.rows_rect(s.start, s.len, 0, (width_px / self.col_width) as u16))
    }

    /// Rectangle of one stat counter in page pixels.
    pub fn stat_rect(&self, index: usize) -> Option<Rect> {
        let start = self
            .blocks
            .iter()
            .position(|b| matches!(b, Block::StatBanner(_)))?;
        let col = INDENT + index as u16 * STAT_COLUMN_WIDTH;
        Some(self.rows_rect(start, GLYPH_HEIGHT + 1, col, STAT_COLUMN_WIDTH))
    }

    /// Card width in columns for a viewport `cols` wide.
    pub fn card_width(cols: u16) -> u16 {
        cols.saturating_sub(INDENT * 2).min(MAX_CARD_WIDTH)
    }

    /// Element under the page-pixel point `point`.
    pub fn hover_at(&self, point: Vec2, cols: u16) -> Option<Hover> {
        if point.y < 0.0 || point.x < 0.0 {
            return None;
        }
        let row = (point.y / self.row_height) as usize;
        let col = (point.x / self.col_width) as u16;
        let card_width = Self::card_width(cols);
        let in_card = col >= INDENT && col < INDENT + card_width;

        match self.blocks.get(row)? {
            Block::AboutCard(_) if in_card => {
                let (start, len) = self.run_of(row, |b| matches!(b, Block::AboutCard(_)));
                Some(Hover::AboutCard(self.rows_rect(start, len, INDENT, card_width)))
            }
            Block::Project { index, .. } if in_card => {
                let index = *index;
                let (start, len) = self.run_of(row, |b| {
                    matches!(b, Block::Project { index: i, .. } if *i == index)
                });
                Some(Hover::Project(index, self.rows_rect(start, len, INDENT, card_width)))
            }
            Block::Skills => item_at(&self.skill_columns, col).map(Hover::Skill),
            Block::MemoryBlocks => item_at(&self.memory_columns, col).map(Hover::Memory),
            _ => None,
        }
    }

    /// Contiguous rows around `row` whose blocks satisfy `pred`.
    fn run_of(&self, row: usize, pred: impl Fn(&Block) -> bool) -> (usize, usize) {
        let mut start = row;
        while start > 0 && pred(&self.blocks[start - 1]) {
            start -= 1;
        }
        let mut end = row + 1;
        while end < self.blocks.len() && pred(&self.blocks[end]) {
            end += 1;
        }
        (start, end - start)
    }

    fn rows_rect(&self, start: usize, len: usize, col: u16, cols: u16) -> Rect {
        Rect::new(
            col as f32 * self.col_width,
            start as f32 * self.row_height,
            cols as f32 * self.col_width,
            len as f32 * self.row_height,
        )
    }
}

fn item_at(columns: &[(u16, u16)], col: u16) -> Option<usize> {
    columns
        .iter()
        .position(|&(start, width)| col >= start && col < start + width)
}

/// Banner rows for a counter label, padded to the stat column.
pub fn stat_banner_row(label: &str, row: usize) -> String {
    if is_supported(label) {
        return build_banner(label).get(row).cloned().unwrap_or_default();
    }
    // Labels the font cannot draw show as plain text on the middle row
    if row == GLYPH_HEIGHT / 2 {
        label.to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page {
        Page::build(&Profile::default(), 8, 16)
    }

    #[test]
    fn test_sections_are_contiguous() {
        let page = page();
        let ids: Vec<_> = page.sections().iter().map(|s| s.id).collect();
        assert_eq!(ids, ["home", "about", "skills", "projects", "contact"]);
        let mut next = 0;
        for s in page.sections() {
            assert_eq!(s.start, next);
            next += s.len;
        }
        assert_eq!(next, page.blocks().len());
        assert!(!page.sections()[0].reveal);
    }

    #[test]
    fn test_section_bounds_in_pixels() {
        let page = page();
        let bounds = page.section_bounds();
        let about = &page.sections()[1];
        assert_eq!(bounds[1].id, "about");
        assert_eq!(bounds[1].offset_top, about.start as f32 * 16.0);
        assert_eq!(bounds[1].height, about.len as f32 * 16.0);
        assert_eq!(page.height(), page.blocks().len() as f32 * 16.0);
    }

    #[test]
    fn test_hover_project_card() {
        let page = page();
        let row = page
            .blocks()
            .iter()
            .position(|b| matches!(b, Block::Project { index: 1, .. }))
            .unwrap();
        let point = Vec2::new((INDENT as f32 + 2.0) * 8.0, row as f32 * 16.0 + 1.0);
        match page.hover_at(point, 100) {
            Some(Hover::Project(1, rect)) => {
                assert_eq!(rect.top, row as f32 * 16.0);
                assert_eq!(rect.height, 5.0 * 16.0);
                assert_eq!(rect.width, MAX_CARD_WIDTH as f32 * 8.0);
            }
            other => panic!("unexpected hover {other:?}"),
        }
        // left margin is not part of the card
        assert_eq!(page.hover_at(Vec2::new(0.0, row as f32 * 16.0), 100), None);
    }

    #[test]
    fn test_hover_skill() {
        let page = page();
        let row = page.blocks().iter().position(|b| *b == Block::Skills).unwrap();
        let (start, _) = page.skill_columns[2];
        let point = Vec2::new(start as f32 * 8.0, row as f32 * 16.0);
        assert_eq!(page.hover_at(point, 100), Some(Hover::Skill(2)));
    }

    #[test]
    fn test_item_columns() {
        let cols = item_columns(&["Rust".to_string(), "C".to_string()]);
        assert_eq!(cols, vec![(INDENT, 8), (INDENT + 10, 5)]);
    }

    #[test]
    fn test_stat_rect_and_banner() {
        let page = page();
        let rect = page.stat_rect(1).unwrap();
        assert_eq!(rect.left, (INDENT + STAT_COLUMN_WIDTH) as f32 * 8.0);
        assert_eq!(rect.height, (GLYPH_HEIGHT + 1) as f32 * 16.0);
        assert_eq!(stat_banner_row("24/7", GLYPH_HEIGHT / 2), "24/7");
        assert_eq!(stat_banner_row("24/7", 0), "");
        assert!(!stat_banner_row("3+", 0).is_empty());
    }

    #[test]
    fn test_section_of() {
        let page = page();
        assert_eq!(page.section_of(0), Some(0));
        assert_eq!(page.section_of(page.blocks().len()), None);
    }
}
