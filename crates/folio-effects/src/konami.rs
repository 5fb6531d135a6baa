//! Konami code easter egg.

use std::collections::VecDeque;

use tracing::info;

/// A key as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Char(char),
    Other,
}

/// Up Up Down Down Left Right Left Right b a.
pub const SEQUENCE: [Key; 10] = [
    Key::Up,
    Key::Up,
    Key::Down,
    Key::Down,
    Key::Left,
    Key::Right,
    Key::Left,
    Key::Right,
    Key::Char('b'),
    Key::Char('a'),
];

/// Length of one hue cycle of the rainbow effect.
pub const RAINBOW_PERIOD_MS: u64 = 2000;

/// How long the rainbow effect lasts after activation.
pub const RAINBOW_DURATION_MS: u64 = 5000;

/// Remembers the most recent keys and spots the Konami sequence.
#[derive(Debug, Clone, Default)]
pub struct KonamiDetector {
    recent: VecDeque<Key>,
}

impl KonamiDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Returns true when it completes the sequence.
    pub fn push(&mut self, key: Key) -> bool {
        self.recent.push_back(key);
        while self.recent.len() > SEQUENCE.len() {
            self.recent.pop_front();
        }
        let matched = self.recent.iter().eq(SEQUENCE.iter());
        if matched {
            info!("konami code activated");
        }
        matched
    }
}

/// The hue-cycling effect shown after the code is entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rainbow {
    started_ms: Option<u64>,
}

impl Rainbow {
    /// Start (or restart) the effect at `now_ms`.
    pub fn activate(&mut self, now_ms: u64) {
        self.started_ms = Some(now_ms);
    }

    /// Hue rotation in degrees at `now_ms`, `None` when inactive.
    pub fn hue_at(&mut self, now_ms: u64) -> Option<f32> {
        let started = self.started_ms?;
        let elapsed = now_ms.saturating_sub(started);
        if elapsed >= RAINBOW_DURATION_MS {
            self.started_ms = None;
            return None;
        }
        Some((elapsed % RAINBOW_PERIOD_MS) as f32 / RAINBOW_PERIOD_MS as f32 * 360.0)
    }

    pub fn is_active(&self) -> bool {
        self.started_ms.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_sequence() {
        let mut detector = KonamiDetector::new();
        let results: Vec<bool> = SEQUENCE.iter().map(|&k| detector.push(k)).collect();
        assert_eq!(results.iter().filter(|&&r| r).count(), 1);
        assert!(results[9]);
    }

    #[test]
    fn test_detects_after_noise() {
        let mut detector = KonamiDetector::new();
        for key in [Key::Char('x'), Key::Up, Key::Other, Key::Down] {
            assert!(!detector.push(key));
        }
        let mut last = false;
        for key in SEQUENCE {
            last = detector.push(key);
        }
        assert!(last);
    }

    #[test]
    fn test_wrong_case_does_not_match() {
        let mut detector = KonamiDetector::new();
        for key in &SEQUENCE[..8] {
            detector.push(*key);
        }
        detector.push(Key::Char('B'));
        assert!(!detector.push(Key::Char('a')));
    }

    #[test]
    fn test_rainbow_cycles_then_stops() {
        let mut rainbow = Rainbow::default();
        assert_eq!(rainbow.hue_at(0), None);
        rainbow.activate(1000);
        assert_eq!(rainbow.hue_at(1000), Some(0.0));
        assert_eq!(rainbow.hue_at(1500), Some(90.0));
        assert_eq!(rainbow.hue_at(3500), Some(90.0));
        assert!(rainbow.is_active());
        assert_eq!(rainbow.hue_at(6000), None);
        assert!(!rainbow.is_active());
    }
}
