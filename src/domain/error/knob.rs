// SPDX-License-Identifier: MPL-2.0
//! Errors raised when building knob value objects from untrusted input.

use std::fmt;

/// Rejections produced by [`KnobRange::new`](crate::domain::knob::KnobRange::new).
///
/// The knob itself never fails once built; these only guard construction
/// from configuration files or other external data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KnobError {
    /// `min` is not strictly lower than `max`.
    InvalidRange { min: f32, max: f32 },

    /// A bound is NaN or infinite.
    NonFinite { min: f32, max: f32 },

    /// `max - min` overflows to infinity.
    SpanOverflow { min: f32, max: f32 },
}

impl fmt::Display for KnobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnobError::InvalidRange { min, max } => {
                write!(f, "invalid knob range: min {} must be lower than max {}", min, max)
            }
            KnobError::NonFinite { min, max } => {
                write!(f, "knob bounds must be finite (min {}, max {})", min, max)
            }
            KnobError::SpanOverflow { min, max } => {
                write!(f, "knob range from {} to {} is too wide", min, max)
            }
        }
    }
}

impl std::error::Error for KnobError {}
