// SPDX-License-Identifier: MPL-2.0
//! Knob newtypes.
//!
//! This module provides type-safe wrappers for knob values,
//! ensuring they are always within valid ranges.

use crate::domain::error::KnobError;

// =============================================================================
// Knob Bounds
// =============================================================================

/// Fixed rotation span and default value bounds of a knob.
pub mod knob_bounds {
    /// Rotation angle of the knob face at the minimum value (degrees).
    pub const MIN_ANGLE: f32 = -135.0;
    /// Rotation angle of the knob face at the maximum value (degrees).
    pub const MAX_ANGLE: f32 = 135.0;
    /// Default lower bound of the value range.
    pub const DEFAULT_MIN: f32 = 0.0;
    /// Default upper bound of the value range.
    pub const DEFAULT_MAX: f32 = 100.0;
    /// Upper bound of a normalized value.
    pub const NORMALIZED_MAX: f32 = 100.0;
}

const _: () = {
    assert!(knob_bounds::MIN_ANGLE < knob_bounds::MAX_ANGLE);
    assert!(knob_bounds::DEFAULT_MIN < knob_bounds::DEFAULT_MAX);
};

// =============================================================================
// KnobRange
// =============================================================================

/// Value domain of a knob, guaranteed to satisfy `min < max` with finite bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobRange {
    min: f32,
    max: f32,
}

impl KnobRange {
    /// Creates a new range, rejecting non-finite or inverted bounds and
    /// bounds whose distance does not fit in an `f32`.
    pub fn new(min: f32, max: f32) -> Result<Self, KnobError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(KnobError::NonFinite { min, max });
        }
        if min >= max {
            return Err(KnobError::InvalidRange { min, max });
        }
        if !(max - min).is_finite() {
            return Err(KnobError::SpanOverflow { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn min(self) -> f32 {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn max(self) -> f32 {
        self.max
    }

    /// Returns `max - min`, always strictly positive.
    #[must_use]
    pub fn span(self) -> f32 {
        self.max - self.min
    }

    /// Returns the middle of the range.
    #[must_use]
    pub fn midpoint(self) -> f32 {
        self.min + self.span() / 2.0
    }

    /// Clamps a value into `[min, max]`.
    ///
    /// NaN is passed through unchanged; callers decide how to treat it.
    #[must_use]
    pub fn clamp(self, value: f32) -> f32 {
        self.min.max(self.max.min(value))
    }

    /// Returns where `value` sits in the range as a fraction (0.0 at `min`, 1.0 at `max`).
    #[must_use]
    pub fn fraction_of(self, value: f32) -> f32 {
        (value - self.min) / self.span()
    }

    /// Returns the value located at `fraction` of the range.
    #[must_use]
    pub fn value_at(self, fraction: f32) -> f32 {
        self.min + fraction * self.span()
    }
}

impl Default for KnobRange {
    fn default() -> Self {
        Self {
            min: knob_bounds::DEFAULT_MIN,
            max: knob_bounds::DEFAULT_MAX,
        }
    }
}

// =============================================================================
// KnobAngle
// =============================================================================

/// Rotation of the knob face in degrees, guaranteed to be within -135°..=135°.
///
/// 0° points straight up; positive angles turn clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KnobAngle(f32);

impl KnobAngle {
    /// Creates a new angle, clamping to the knob span.
    #[must_use]
    pub fn new(degrees: f32) -> Self {
        Self(knob_bounds::MIN_ANGLE.max(knob_bounds::MAX_ANGLE.min(degrees)))
    }

    /// Returns the angle located at `fraction` of the span.
    #[must_use]
    pub fn from_fraction(fraction: f32) -> Self {
        Self::new(knob_bounds::MIN_ANGLE + fraction * Self::span())
    }

    /// Total rotation span in degrees.
    #[must_use]
    pub fn span() -> f32 {
        knob_bounds::MAX_ANGLE - knob_bounds::MIN_ANGLE
    }

    /// Returns the angle in degrees.
    #[must_use]
    pub fn degrees(self) -> f32 {
        self.0
    }

    /// Returns the angle in radians.
    #[must_use]
    pub fn radians(self) -> f32 {
        self.0.to_radians()
    }

    /// Returns the position of this angle within the span (0.0..=1.0).
    #[must_use]
    pub fn fraction(self) -> f32 {
        (self.0 - knob_bounds::MIN_ANGLE) / Self::span()
    }
}

// =============================================================================
// NormalizedValue
// =============================================================================

/// Knob value re-expressed as a percentage (0–100) of its range.
///
/// This is the value handed to change listeners, independent of the
/// configured `min`/`max`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct NormalizedValue(f32);

impl NormalizedValue {
    /// Creates a new normalized value, clamping to 0–100.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        Self(0.0_f32.max(knob_bounds::NORMALIZED_MAX.min(percent)))
    }

    /// Creates a normalized value from a 0.0–1.0 fraction.
    #[must_use]
    pub fn from_fraction(fraction: f32) -> Self {
        Self::new(fraction * knob_bounds::NORMALIZED_MAX)
    }

    /// Returns the percentage.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the value as a 0.0–1.0 fraction.
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        self.0 / knob_bounds::NORMALIZED_MAX
    }
}

// =============================================================================
// Tests
// =============================================================================
