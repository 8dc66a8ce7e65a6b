// SPDX-License-Identifier: MPL-2.0
//! Knob domain types.
//!
//! Value objects and pointer geometry for rotary knobs, independent
//! of any presentation framework.

pub mod config;
pub mod mapping;
pub mod newtypes;

// Re-export commonly used types
pub use config::KnobConfig;
pub use newtypes::{knob_bounds, KnobAngle, KnobRange, NormalizedValue};
