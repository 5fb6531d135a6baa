//! Style values produced by the effect functions.

use std::fmt;

/// A CSS-like transform. Fields left at their identity value are omitted
/// from the rendered string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Perspective distance in pixels.
    pub perspective: Option<f32>,
    /// Rotation about the X axis in degrees.
    pub rotate_x: f32,
    /// Rotation about the Y axis in degrees.
    pub rotate_y: f32,
    /// Rotation about the Z axis in degrees.
    pub rotate: f32,
    /// Translation in pixels.
    pub translate: (f32, f32),
    /// Uniform scale factor.
    pub scale: f32,
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        perspective: None,
        rotate_x: 0.0,
        rotate_y: 0.0,
        rotate: 0.0,
        translate: (0.0, 0.0),
        scale: 1.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(p) = self.perspective {
            parts.push(format!("perspective({p}px)"));
        }
        if self.rotate != 0.0 {
            parts.push(format!("rotate({}deg)", self.rotate));
        }
        if self.rotate_x != 0.0 || self.rotate_y != 0.0 {
            parts.push(format!("rotateX({}deg)", self.rotate_x));
            parts.push(format!("rotateY({}deg)", self.rotate_y));
        }
        let (x, y) = self.translate;
        if x != 0.0 {
            parts.push(format!("translate({x}px, {y}px)"));
        } else if y != 0.0 {
            parts.push(format!("translateY({y}px)"));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", self.scale));
        }
        if parts.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&parts.join(" "))
        }
    }
}

/// Inline style overrides for one element. `None` means "not set", so the
/// element falls back to its stylesheet value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementStyle {
    pub transform: Option<Transform>,
    pub opacity: Option<f32>,
}

impl ElementStyle {
    /// A style with no overrides.
    pub const CLEARED: Self = Self {
        transform: None,
        opacity: None,
    };
}
