//! Tunable parameters for the particle field and motion handling.

use serde::{Deserialize, Serialize};

use crate::Rgb;

/// A closed numeric interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within the closed interval `[min, max]`.
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Width of the interval, never negative.
    pub fn span(&self) -> f32 {
        (self.max - self.min).max(0.0)
    }
}

/// Parameters of the ambient particle background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldParams {
    /// Number of particles in the field.
    pub count: usize,
    /// Largest absolute per-frame velocity on each axis.
    pub max_speed: f32,
    /// Radius range in pixels.
    pub radius: Range,
    /// Opacity range.
    pub opacity: Range,
    /// Fill color of every particle.
    pub color: Rgb,
    /// Fixed RNG seed; a time-based seed is used when absent.
    pub seed: Option<u64>,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: 80,
            max_speed: 0.25,
            radius: Range::new(1.0, 3.0),
            opacity: Range::new(0.3, 0.8),
            color: Rgb::new(102, 126, 234),
            seed: None,
        }
    }
}

/// User preference for animated transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotionPreference {
    #[default]
    NoPreference,
    Reduce,
}

impl MotionPreference {
    pub fn is_reduced(self) -> bool {
        self == MotionPreference::Reduce
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_contains_both_ends() {
        let range = FieldParams::default().opacity;
        assert!(range.contains(0.3));
        assert!(range.contains(0.8));
        assert!(!range.contains(0.81));
        assert!(!range.contains(0.29));
        assert!((range.span() - 0.5).abs() < 1e-6);
    }
}
