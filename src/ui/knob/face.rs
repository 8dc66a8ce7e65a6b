// SPDX-License-Identifier: MPL-2.0
//! Render handle describing what a knob should look like right now.

use crate::domain::knob::KnobAngle;

/// Visual state of a knob: face rotation, value label and active marker.
///
/// Produced by [`RotaryKnob::face`](super::RotaryKnob::face) and consumed by
/// the canvas that draws the knob.
#[derive(Debug, Clone, PartialEq)]
pub struct KnobFace {
    /// Rotation of the face, 0° pointing up, clockwise positive.
    pub rotation: KnobAngle,
    /// Current value rounded to an integer.
    pub label: String,
    /// True while the knob is being dragged.
    pub active: bool,
}

impl KnobFace {
    /// Unit vector of the indicator in screen coordinates (y grows downwards).
    #[must_use]
    pub fn indicator_direction(&self) -> (f32, f32) {
        let radians = self.rotation.radians();
        (radians.sin(), -radians.cos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn face_at(degrees: f32) -> KnobFace {
        KnobFace {
            rotation: KnobAngle::new(degrees),
            label: String::new(),
            active: false,
        }
    }

    #[test]
    fn zero_rotation_points_up() {
        let (x, y) = face_at(0.0).indicator_direction();
        assert_abs_diff_eq!(x, 0.0);
        assert_abs_diff_eq!(y, -1.0);
    }

    #[test]
    fn positive_rotation_turns_clockwise() {
        let (x, y) = face_at(90.0).indicator_direction();
        assert_abs_diff_eq!(x, 1.0, epsilon = 0.0001);
        assert_abs_diff_eq!(y, 0.0, epsilon = 0.0001);
    }

    #[test]
    fn minimum_rotation_points_down_left() {
        let (x, y) = face_at(-135.0).indicator_direction();
        assert!(x < 0.0);
        assert!(y > 0.0);
    }
}
