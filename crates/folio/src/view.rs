//! Rendering of page blocks and the navigation bar.
//!
//! Every function here is a pure mapping from layout plus effect values to
//! ratatui lines; the caller decides where they land.

use folio_background::hue_rotate;
use folio_config::{DisplayConfig, Profile};
use folio_core::Rgb;
use folio_effects::a11y::external_link;
use folio_effects::nav::MenuState;
use folio_effects::tilt::{memory_block, skill_cube};
use folio_effects::{ElementStyle, Transform};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::page::{Block, CardRow, Hover, INDENT, Page, STAT_COLUMN_WIDTH, stat_banner_row};

/// Colors used for one frame, after any hue rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub accent: Rgb,
    pub secondary: Rgb,
    pub highlight: Rgb,
    pub text: Rgb,
    pub dim: Rgb,
    pub bar: Rgb,
}

impl Palette {
    pub fn new(display: &DisplayConfig, hue: f32) -> Self {
        let bar = display.accent.with_alpha(0.25).over(display.background);
        Self {
            accent: hue_rotate(display.accent, hue),
            secondary: hue_rotate(display.secondary, hue),
            highlight: hue_rotate(display.highlight, hue),
            text: Rgb::new(225, 225, 235),
            dim: Rgb::new(90, 90, 110),
            bar: hue_rotate(bar, hue),
        }
    }
}

/// Per-frame state a block needs to render itself.
#[derive(Debug, Clone)]
pub struct BlockContext<'a> {
    pub profile: &'a Profile,
    pub palette: Palette,
    /// Viewport width in columns.
    pub cols: u16,
    /// Whether the block's section has been revealed.
    pub revealed: bool,
    /// Current text of each stat counter.
    pub stat_labels: &'a [String],
    /// Tagline as currently typed.
    pub tagline: &'a str,
    pub greeting: &'a str,
    pub year: i32,
    /// Element under the pointer and its transform.
    pub hover: Option<(Hover, Transform)>,
}

/// Horizontal shift, in columns, that suggests a rotation about the Y axis.
pub fn tilt_shift(transform: &Transform) -> i16 {
    (transform.rotate_y / 4.0).round().clamp(-2.0, 2.0) as i16
}

impl BlockContext<'_> {
    fn fg(&self, color: Rgb) -> Style {
        if self.revealed {
            Style::new().fg(color.color())
        } else {
            Style::new().fg(self.palette.dim.color())
        }
    }

    /// Transform applied to the card a block belongs to, if hovered.
    fn card_transform(&self, block: &Block) -> Option<Transform> {
        match (block, self.hover) {
            (Block::AboutCard(_), Some((Hover::AboutCard(_), t))) => Some(t),
            (Block::Project { index, .. }, Some((Hover::Project(i, _), t))) if *index == i => {
                Some(t)
            }
            _ => None,
        }
    }

    /// Render `block` as a starting column and a line.
    pub fn line(&self, block: &Block) -> Option<(u16, Line<'static>)> {
        let p = self.palette;
        match block {
            Block::Blank => None,
            Block::Greeting => Some((
                INDENT,
                Line::styled(self.greeting.to_string(), self.fg(p.dim)),
            )),
            Block::Name => Some((
                INDENT,
                Line::styled(
                    self.profile.name.clone(),
                    self.fg(p.accent).add_modifier(Modifier::BOLD),
                ),
            )),
            Block::Tagline => Some((
                INDENT,
                Line::styled(self.tagline.to_string(), self.fg(p.text)),
            )),
            Block::StatBanner(row) => Some((
                INDENT,
                self.stats_row(|label| stat_banner_row(label, *row), p.accent),
            )),
            Block::StatLabels => Some((
                INDENT,
                self.stats_row_from(self.profile.stats.iter().map(|s| s.label.clone()), p.dim),
            )),
            Block::Heading(title) => Some((
                INDENT,
                Line::styled(format!("## {title}"), self.fg(p.secondary).add_modifier(Modifier::BOLD)),
            )),
            Block::AboutCard(row) | Block::Project { row, .. } => self.card_line(block, row),
            Block::Skills => Some((INDENT, self.skills_line())),
            Block::MemoryBlocks => Some((INDENT, self.memory_line())),
            Block::Link(index) => self.link_line(*index),
            Block::Footer => Some((
                INDENT,
                Line::styled(format!("© {} {}", self.year, self.profile.name), self.fg(p.dim)),
            )),
        }
    }

    fn stats_row(&self, text: impl Fn(&str) -> String, color: Rgb) -> Line<'static> {
        self.stats_row_from(self.stat_labels.iter().map(|l| text(l)), color)
    }

    fn stats_row_from(&self, cells: impl Iterator<Item = String>, color: Rgb) -> Line<'static> {
        let width = STAT_COLUMN_WIDTH as usize;
        let spans: Vec<Span> = cells
            .map(|cell| {
                let cell: String = cell.chars().take(width - 1).collect();
                let pad = width - cell.chars().count();
                Span::styled(format!("{cell}{}", " ".repeat(pad)), self.fg(color))
            })
            .collect();
        Line::from(spans)
    }

    fn card_line(&self, block: &Block, row: &CardRow) -> Option<(u16, Line<'static>)> {
        let p = self.palette;
        let width = Page::card_width(self.cols) as usize;
        if width < 4 {
            return None;
        }
        let transform = self.card_transform(block);
        let border = if transform.is_some() { p.highlight } else { p.accent };
        let shift = transform.as_ref().map_or(0, tilt_shift);
        let x = (INDENT as i16 + shift).max(0) as u16;

        let inner = width - 4;
        let line = match row {
            CardRow::Top => Line::styled(format!("╭{}╮", "─".repeat(width - 2)), self.fg(border)),
            CardRow::Bottom => Line::styled(format!("╰{}╯", "─".repeat(width - 2)), self.fg(border)),
            CardRow::Title(text) | CardRow::Text(text) => {
                let text: String = text.chars().take(inner).collect();
                let pad = inner - text.chars().count();
                let text_style = if matches!(row, CardRow::Title(_)) {
                    self.fg(p.secondary).add_modifier(Modifier::BOLD)
                } else {
                    self.fg(p.text)
                };
                Line::from(vec![
                    Span::styled("│ ", self.fg(border)),
                    Span::styled(format!("{text}{}", " ".repeat(pad)), text_style),
                    Span::styled(" │", self.fg(border)),
                ])
            }
        };
        Some((x, line))
    }

    fn skills_line(&self) -> Line<'static> {
        let hovered = match self.hover {
            Some((Hover::Skill(i), _)) => Some(i),
            _ => None,
        };
        let spans = self
            .profile
            .skills
            .iter()
            .enumerate()
            .flat_map(|(i, skill)| {
                let face = skill_cube(hovered == Some(i));
                let style = if face.scale > 1.0 {
                    self.fg(self.palette.highlight)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    self.fg(self.palette.accent)
                };
                [Span::styled(format!("[ {skill} ]"), style), Span::raw("  ")]
            })
            .collect::<Vec<_>>();
        Line::from(spans)
    }

    fn memory_line(&self) -> Line<'static> {
        let hovered = match self.hover {
            Some((Hover::Memory(i), _)) => Some(i),
            _ => None,
        };
        let spans = self
            .profile
            .memory_blocks
            .iter()
            .enumerate()
            .flat_map(|(i, label)| {
                let style = match memory_block(hovered == Some(i)) {
                    ElementStyle {
                        opacity: Some(o), ..
                    } if o >= 1.0 => self.fg(self.palette.text).add_modifier(Modifier::BOLD),
                    _ => self.fg(self.palette.dim),
                };
                [Span::styled(format!("▕ {label} ▏"), style), Span::raw("  ")]
            })
            .collect::<Vec<_>>();
        Line::from(spans)
    }

    fn link_line(&self, index: usize) -> Option<(u16, Line<'static>)> {
        let link = self.profile.links.get(index)?;
        let mut spans = vec![
            Span::styled(format!("{:<10}", link.label), self.fg(self.palette.text)),
            Span::styled(
                link.href.clone(),
                self.fg(self.palette.accent).add_modifier(Modifier::UNDERLINED),
            ),
        ];
        if let Some(attrs) = external_link(&link.href, &self.profile.site_host) {
            spans.push(Span::styled(
                format!(" ↗ ({} {})", attrs.target, attrs.rel),
                self.fg(self.palette.dim),
            ));
        }
        Some((INDENT, Line::from(spans)))
    }
}

/// Clickable region of the navigation bar: start column, width, section.
pub type NavHit = (u16, u16, usize);

/// Navigation bar lines and their clickable regions.
#[derive(Debug, Clone)]
pub struct NavBar {
    pub lines: Vec<Line<'static>>,
    pub hits: Vec<(u16, NavHit)>,
}

/// Build the navigation bar.
///
/// `collapsed` selects the hamburger menu; its links appear on the second
/// row while the menu is open. Hit regions are `(row, (col, width, index))`.
pub fn nav_bar(
    page: &Page,
    name: &str,
    active: Option<&str>,
    scrolled: bool,
    collapsed: bool,
    menu: &MenuState,
    palette: Palette,
) -> NavBar {
    let bar_style = if scrolled {
        Style::new().bg(palette.bar.color())
    } else {
        Style::new()
    };

    let mut first = vec![Span::styled(
        format!(" {name} "),
        Style::new().fg(palette.accent.color()).add_modifier(Modifier::BOLD),
    )];
    let mut col = name.chars().count() as u16 + 2;
    let mut hits = Vec::new();

    let mut links = Vec::new();
    for (index, section) in page.sections().iter().enumerate() {
        let label = format!(" {} {} ", index + 1, section.title);
        let style = if active == Some(section.id) {
            Style::new()
                .fg(palette.highlight.color())
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::new().fg(palette.text.color())
        };
        links.push((label, style, index));
    }

    let mut second = Vec::new();
    if collapsed {
        // The middle bar disappears when the menu opens
        let open = menu.hamburger()[1].opacity == Some(0.0);
        let toggle = if open { " ✕ menu (m)" } else { " ≡ menu (m)" };
        first.push(Span::styled(toggle, Style::new().fg(palette.text.color())));
        if menu.is_open() {
            let mut col = 1;
            for (label, style, index) in links {
                let width = label.chars().count() as u16;
                hits.push((1, (col, width, index)));
                col += width;
                second.push(Span::styled(label, style));
            }
        }
    } else {
        for (label, style, index) in links {
            let width = label.chars().count() as u16;
            hits.push((0, (col, width, index)));
            col += width;
            first.push(Span::styled(label, style));
        }
    }

    NavBar {
        lines: vec![
            Line::from(first).style(bar_style),
            Line::from(second).style(bar_style),
        ],
        hits,
    }
}
