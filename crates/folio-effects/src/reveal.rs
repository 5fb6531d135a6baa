//! One-shot visibility triggers for reveal animations and counters.

use folio_core::Rect;

/// Watches one element and fires the first time enough of it is visible.
///
/// After firing the watch disconnects and never fires again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityWatch {
    /// Fraction of the element that must be visible (0.0-1.0).
    threshold: f32,
    /// Added to the viewport's bottom edge; negative values shrink it.
    root_margin_bottom: f32,
    /// Whether the watch has already fired.
    fired: bool,
}

impl VisibilityWatch {
    pub fn new(threshold: f32, root_margin_bottom: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            root_margin_bottom,
            fired: false,
        }
    }

    /// Watch used for `data-scroll` reveal animations.
    pub fn reveal() -> Self {
        Self::new(0.1, -50.0)
    }

    /// Watch used for the stats counters.
    pub fn stats() -> Self {
        Self::new(0.5, 0.0)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Check `element` against `viewport` (both in the same coordinates).
    ///
    /// Returns `true` exactly once, on the first check where the visible
    /// ratio reaches the threshold.
    pub fn check(&mut self, element: Rect, viewport: Rect) -> bool {
        if self.fired {
            return false;
        }
        let root = Rect {
            height: (viewport.height + self.root_margin_bottom).max(0.0),
            ..viewport
        };
        if intersection_ratio(element, root) >= self.threshold && is_intersecting(element, root) {
            self.fired = true;
            return true;
        }
        false
    }
}

/// Share of `element` that lies inside `root`. Zero-area elements count as
/// fully visible when they touch the root.
fn intersection_ratio(element: Rect, root: Rect) -> f32 {
    let area = element.width * element.height;
    if area <= 0.0 {
        return if is_intersecting(element, root) { 1.0 } else { 0.0 };
    }
    element.intersection_area(&root) / area
}

fn is_intersecting(element: Rect, root: Rect) -> bool {
    element.left <= root.right()
        && element.right() >= root.left
        && element.top <= root.bottom()
        && element.bottom() >= root.top
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

    #[test]
    fn test_reveal_respects_bottom_margin() {
        let mut watch = VisibilityWatch::reveal();
        // 100px tall element poking 40px into the viewport: all inside the margin
        let element = Rect::new(0.0, 560.0, 800.0, 100.0);
        assert!(!watch.check(element, VIEWPORT));
        // 30px past the margin is 30% visible
        let element = Rect::new(0.0, 520.0, 800.0, 100.0);
        assert!(watch.check(element, VIEWPORT));
    }

    #[test]
    fn test_fires_only_once() {
        let mut watch = VisibilityWatch::stats();
        let element = Rect::new(0.0, 100.0, 200.0, 100.0);
        assert!(watch.check(element, VIEWPORT));
        assert!(watch.has_fired());
        assert!(!watch.check(element, VIEWPORT));
    }

    #[test]
    fn test_stats_threshold_is_half() {
        let mut watch = VisibilityWatch::stats();
        assert!(!watch.check(Rect::new(0.0, 560.0, 100.0, 100.0), VIEWPORT));
        assert!(watch.check(Rect::new(0.0, 550.0, 100.0, 100.0), VIEWPORT));
    }

    #[test]
    fn test_offscreen_element_never_fires() {
        let mut watch = VisibilityWatch::new(0.0, 0.0);
        assert!(!watch.check(Rect::new(0.0, 2000.0, 100.0, 100.0), VIEWPORT));
        assert!(!watch.check(Rect::new(0.0, 0.0, 0.0, 0.0), Rect::new(0.0, 10.0, 1.0, 1.0)));
    }
}
