// SPDX-License-Identifier: MPL-2.0
//! Immutable knob configuration.

use super::newtypes::KnobRange;

/// Range and starting value of a knob.
///
/// The rotation span is fixed (see [`knob_bounds`](super::knob_bounds)) and
/// therefore not part of the configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobConfig {
    range: KnobRange,
    default_value: f32,
}

impl KnobConfig {
    /// Creates a configuration starting at the middle of `range`.
    #[must_use]
    pub fn new(range: KnobRange) -> Self {
        Self {
            range,
            default_value: range.midpoint(),
        }
    }

    /// Sets the starting value. It is clamped into the range when applied.
    ///
    /// NaN is ignored and the previous default is kept.
    #[must_use]
    pub fn with_default_value(mut self, value: f32) -> Self {
        if !value.is_nan() {
            self.default_value = value;
        }
        self
    }

    /// Returns the value range.
    #[must_use]
    pub fn range(&self) -> KnobRange {
        self.range
    }

    /// Returns the starting value as configured (not yet clamped).
    #[must_use]
    pub fn default_value(&self) -> f32 {
        self.default_value
    }
}

impl Default for KnobConfig {
    fn default() -> Self {
        Self::new(KnobRange::default())
    }
}
