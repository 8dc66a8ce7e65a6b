// SPDX-License-Identifier: MPL-2.0
//! Pointer-to-value geometry.
//!
//! Screen coordinates grow downwards, so a pointer straight to the right of
//! the knob center is 0°, below it is +90° and above it is -90°. Angles
//! outside the knob span saturate at its ends.

use super::newtypes::{KnobAngle, KnobRange};

/// Angle in degrees of the vector from `center` to `pointer`, in `(-180, 180]`.
///
/// The pointer sitting exactly on the center yields 0°.
#[must_use]
pub fn pointer_angle(center: (f32, f32), pointer: (f32, f32)) -> f32 {
    let (cx, cy) = center;
    let (px, py) = pointer;
    (py - cy).atan2(px - cx).to_degrees()
}

/// Maps a pointer angle (degrees, unclamped) onto the value domain.
#[must_use]
pub fn angle_to_value(angle_degrees: f32, range: KnobRange) -> f32 {
    range.value_at(KnobAngle::new(angle_degrees).fraction())
}

/// Returns the face rotation for `value`, which must already lie in `range`.
#[must_use]
pub fn value_to_angle(value: f32, range: KnobRange) -> KnobAngle {
    KnobAngle::from_fraction(range.fraction_of(value))
}

/// Maps a pointer position relative to the knob center onto the value domain.
#[must_use]
pub fn pointer_to_value(center: (f32, f32), pointer: (f32, f32), range: KnobRange) -> f32 {
    angle_to_value(pointer_angle(center, pointer), range)
}

/// Rounds to the nearest integer, halves towards positive infinity.
///
/// Stays in `f32` so every finite knob value keeps its magnitude; the result
/// is never `-0.0`.
#[must_use]
pub fn round_half_up(value: f32) -> f32 {
    (value + 0.5).floor() + 0.0
}
