//! Hover effects: 3D card tilt, skill cubes, memory blocks and cursor glow.

use folio_core::{Rect, Vec2};

use crate::style::{ElementStyle, Transform};

/// Perspective applied to tilted cards.
const CARD_PERSPECTIVE: f32 = 1000.0;

/// Pixels of pointer offset per degree of rotation on plain cards.
const CARD_DIVISOR: f32 = 20.0;

/// Pixels of pointer offset per degree of rotation on project cards.
const PROJECT_DIVISOR: f32 = 30.0;

/// Lift applied to a hovered project card.
const PROJECT_LIFT: f32 = -10.0;

/// Rotation toward the pointer, relative to the element's center.
fn rotation(rect: Rect, pointer: Vec2, divisor: f32) -> (f32, f32) {
    let x = pointer.x - rect.left;
    let y = pointer.y - rect.top;
    let center_x = rect.width / 2.0;
    let center_y = rect.height / 2.0;
    ((y - center_y) / divisor, (center_x - x) / divisor)
}

/// Transform of a card while the pointer moves over it.
pub fn card_tilt(rect: Rect, pointer: Vec2) -> Transform {
    let (rotate_x, rotate_y) = rotation(rect, pointer, CARD_DIVISOR);
    Transform {
        perspective: Some(CARD_PERSPECTIVE),
        rotate_x,
        rotate_y,
        ..Transform::IDENTITY
    }
}

/// Transform of a card once the pointer leaves.
pub fn card_rest() -> Transform {
    Transform {
        perspective: Some(CARD_PERSPECTIVE),
        ..Transform::IDENTITY
    }
}

/// Transform of a project card while the pointer moves over it.
pub fn project_tilt(rect: Rect, pointer: Vec2) -> Transform {
    let (rotate_x, rotate_y) = rotation(rect, pointer, PROJECT_DIVISOR);
    Transform {
        rotate_x,
        rotate_y,
        translate: (0.0, PROJECT_LIFT),
        ..Transform::IDENTITY
    }
}

/// Transform of a project card once the pointer leaves.
pub fn project_rest() -> Transform {
    Transform::IDENTITY
}

/// Face transform of a skill cube.
pub fn skill_cube(hovered: bool) -> Transform {
    if hovered {
        Transform {
            rotate_x: 5.0,
            rotate_y: 5.0,
            scale: 1.05,
            ..Transform::IDENTITY
        }
    } else {
        Transform::IDENTITY
    }
}

/// Style of a memory block. Leaving clears the inline overrides.
pub fn memory_block(hovered: bool) -> ElementStyle {
    if hovered {
        ElementStyle {
            transform: Some(Transform {
                translate: (0.0, -5.0),
                ..Transform::IDENTITY
            }),
            opacity: Some(1.0),
        }
    } else {
        ElementStyle::CLEARED
    }
}

/// Position of the cursor glow, following the pointer.
pub fn cursor_glow(pointer: Vec2) -> Vec2 {
    pointer
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CARD: Rect = Rect::new(100.0, 200.0, 400.0, 200.0);

    #[test]
    fn test_card_center_is_flat() {
        let t = card_tilt(CARD, CARD.center());
        assert_eq!(t.rotate_x, 0.0);
        assert_eq!(t.rotate_y, 0.0);
        assert_eq!(t.perspective, Some(1000.0));
    }

    #[test]
    fn test_card_tilts_toward_pointer() {
        // top-left corner: x offset -200, y offset -100 from center
        let t = card_tilt(CARD, Vec2::new(100.0, 200.0));
        assert_eq!(t.rotate_x, -5.0);
        assert_eq!(t.rotate_y, 10.0);
        assert_eq!(t.to_string(), "perspective(1000px) rotateX(-5deg) rotateY(10deg)");
    }

    #[test]
    fn test_project_tilt_is_gentler_and_lifted() {
        let t = project_tilt(CARD, Vec2::new(500.0, 400.0));
        assert!((t.rotate_x - 100.0 / 30.0).abs() < 1e-5);
        assert!((t.rotate_y + 200.0 / 30.0).abs() < 1e-5);
        assert_eq!(t.translate, (0.0, -10.0));
        assert!(project_rest().is_identity());
    }

    #[test]
    fn test_rest_transforms() {
        assert_eq!(card_rest().to_string(), "perspective(1000px)");
        assert_eq!(skill_cube(false), Transform::IDENTITY);
        assert_eq!(
            skill_cube(true).to_string(),
            "rotateX(5deg) rotateY(5deg) scale(1.05)"
        );
    }

    #[test]
    fn test_memory_block_hover() {
        let hovered = memory_block(true);
        assert_eq!(hovered.opacity, Some(1.0));
        assert_eq!(
            hovered.transform.map(|t| t.to_string()),
            Some("translateY(-5px)".to_string())
        );
        assert_eq!(memory_block(false), ElementStyle::CLEARED);
    }

    #[test]
    fn test_cursor_glow_follows_pointer() {
        assert_eq!(cursor_glow(Vec2::new(3.0, 4.0)), Vec2::new(3.0, 4.0));
    }
}
