//! In-page anchor scrolling, smooth scroll animation and keyboard shortcuts.

use folio_core::MotionPreference;

use crate::nav::SectionBounds;

/// Duration of a smooth scroll.
pub const SMOOTH_SCROLL_MS: u64 = 450;

/// Document offset to scroll to for an in-page anchor `href`.
///
/// Bare `#` links and unknown targets yield `None`. The target is placed
/// just below the navigation bar.
pub fn anchor_target(href: &str, sections: &[SectionBounds], nav_height: f32) -> Option<f32> {
    let id = href.strip_prefix('#').filter(|id| !id.is_empty())?;
    let section = sections.iter().find(|s| s.id == id)?;
    Some((section.offset_top - nav_height).max(0.0))
}

/// An in-flight scroll animation from one offset to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    to: f32,
    started_ms: u64,
    duration_ms: u64,
}

impl SmoothScroll {
    /// Start scrolling from `from` to `to` at time `now_ms`. Reduced motion
    /// makes the scroll instant.
    pub fn new(from: f32, to: f32, now_ms: u64, motion: MotionPreference) -> Self {
        let duration_ms = if motion.is_reduced() { 0 } else { SMOOTH_SCROLL_MS };
        Self {
            from,
            to,
            started_ms: now_ms,
            duration_ms,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Scroll offset at `now_ms`, eased out.
    pub fn offset_at(&self, now_ms: u64) -> f32 {
        let t = self.progress(now_ms);
        let eased = 1.0 - (1.0 - t).powi(3);
        self.from + (self.to - self.from) * eased
    }

    /// Whether the animation has reached its target at `now_ms`.
    pub fn is_finished(&self, now_ms: u64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    fn progress(&self, now_ms: u64) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.started_ms);
        (elapsed as f32 / self.duration_ms as f32).min(1.0)
    }
}

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
}

/// Kind of element that currently has keyboard focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Page,
    Input,
    TextArea,
}

/// Action bound to a single-key shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Scroll to the top of the page.
    Home,
    /// Scroll to the contact section.
    Contact,
}

/// Resolve a key press to a shortcut.
///
/// `h` is ignored while typing in inputs and text areas; `c` only while
/// typing in inputs.
pub fn shortcut(key: char, modifiers: Modifiers, focus: Focus) -> Option<Shortcut> {
    if modifiers.ctrl || modifiers.meta {
        return None;
    }
    match key {
        'h' if !matches!(focus, Focus::Input | Focus::TextArea) => Some(Shortcut::Home),
        'c' if focus != Focus::Input => Some(Shortcut::Contact),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 500.0),
            SectionBounds::new("contact", 900.0, 300.0),
        ]
    }

    #[test]
    fn test_anchor_target() {
        let s = sections();
        assert_eq!(anchor_target("#contact", &s, 64.0), Some(836.0));
        assert_eq!(anchor_target("#home", &s, 64.0), Some(0.0));
        assert_eq!(anchor_target("#", &s, 64.0), None);
        assert_eq!(anchor_target("", &s, 64.0), None);
        assert_eq!(anchor_target("#missing", &s, 64.0), None);
        assert_eq!(anchor_target("contact", &s, 64.0), None);
    }

    #[test]
    fn test_smooth_scroll_eases_to_target() {
        let scroll = SmoothScroll::new(0.0, 900.0, 1000, MotionPreference::NoPreference);
        assert_eq!(scroll.offset_at(1000), 0.0);
        let mid = scroll.offset_at(1000 + SMOOTH_SCROLL_MS / 2);
        assert!(mid > 450.0 && mid < 900.0, "{mid}");
        assert!(!scroll.is_finished(1000 + SMOOTH_SCROLL_MS - 1));
        assert_eq!(scroll.offset_at(1000 + SMOOTH_SCROLL_MS), 900.0);
        assert!(scroll.is_finished(5000));
    }

    #[test]
    fn test_reduced_motion_scrolls_instantly() {
        let scroll = SmoothScroll::new(100.0, 0.0, 10, MotionPreference::Reduce);
        assert!(scroll.is_finished(10));
        assert_eq!(scroll.offset_at(10), 0.0);
    }

    #[test]
    fn test_shortcuts() {
        let none = Modifiers::default();
        let ctrl = Modifiers {
            ctrl: true,
            meta: false,
        };
        assert_eq!(shortcut('h', none, Focus::Page), Some(Shortcut::Home));
        assert_eq!(shortcut('c', none, Focus::Page), Some(Shortcut::Contact));
        assert_eq!(shortcut('h', ctrl, Focus::Page), None);
        assert_eq!(shortcut('h', none, Focus::TextArea), None);
        assert_eq!(shortcut('c', none, Focus::Input), None);
        // contact shortcut still fires from a text area
        assert_eq!(shortcut('c', none, Focus::TextArea), Some(Shortcut::Contact));
        assert_eq!(shortcut('x', none, Focus::Page), None);
    }
}
