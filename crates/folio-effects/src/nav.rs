//! Navigation bar: scrolled state, active link and the mobile menu.

use tracing::debug;

use crate::style::{ElementStyle, Transform};

/// Scroll offset past which the navigation bar switches to its solid style.
pub const SCROLLED_THRESHOLD: f32 = 50.0;

/// How far above a section its link becomes active.
pub const ACTIVE_OFFSET: f32 = 100.0;

/// Viewports at most this wide use the collapsible menu.
pub const MOBILE_BREAKPOINT: f32 = 968.0;

/// Vertical extent of a page section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    /// Anchor id, without the leading `#`.
    pub id: String,
    /// Distance from the top of the document.
    pub offset_top: f32,
    pub height: f32,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, offset_top: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            offset_top,
            height,
        }
    }
}

/// Whether the navigation bar should use its scrolled style.
pub fn is_scrolled(scroll_y: f32) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// The section whose link should be highlighted at `scroll_y`.
///
/// Returns `None` when no section matches; callers keep the previously
/// active link in that case.
pub fn active_section(scroll_y: f32, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| {
            let top = section.offset_top - ACTIVE_OFFSET;
            scroll_y > top && scroll_y <= top + section.height
        })
        .map(|section| section.id.as_str())
}

/// Whether a nav link's `href` points at `section_id`.
pub fn link_targets(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#') == Some(section_id)
}

/// Open/closed state of the collapsible menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle button pressed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        debug!(open = self.open, "menu toggled");
    }

    /// A nav link was followed. Narrow viewports close the menu.
    pub fn on_link_click(&mut self, viewport_width: f32) {
        if viewport_width <= MOBILE_BREAKPOINT {
            self.open = false;
        }
    }

    /// Styles of the three hamburger bars.
    pub fn hamburger(&self) -> [ElementStyle; 3] {
        if self.open {
            [
                ElementStyle {
                    transform: Some(Transform {
                        rotate: 45.0,
                        translate: (8.0, 8.0),
                        ..Transform::IDENTITY
                    }),
                    opacity: None,
                },
                ElementStyle {
                    transform: None,
                    opacity: Some(0.0),
                },
                ElementStyle {
                    transform: Some(Transform {
                        rotate: -45.0,
                        translate: (8.0, -8.0),
                        ..Transform::IDENTITY
                    }),
                    opacity: None,
                },
            ]
        } else {
            [
                ElementStyle::CLEARED,
                ElementStyle {
                    transform: None,
                    opacity: Some(1.0),
                },
                ElementStyle::CLEARED,
            ]
        }
    }
}
