// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Knob size**: On-screen diameter of each knob
//! - **Channels**: Value range of a mixer channel when the file omits it

use crate::domain::knob::knob_bounds;

// ==========================================================================
// Knob Size Defaults
// ==========================================================================

/// Default knob diameter in logical pixels.
pub const DEFAULT_KNOB_SIZE: f32 = 96.0;

/// Minimum knob diameter in logical pixels.
pub const MIN_KNOB_SIZE: f32 = 48.0;

/// Maximum knob diameter in logical pixels.
pub const MAX_KNOB_SIZE: f32 = 256.0;

// ==========================================================================
// Channel Defaults
// ==========================================================================

/// Lower bound of a channel whose `min` is not set.
pub const DEFAULT_CHANNEL_MIN: f32 = knob_bounds::DEFAULT_MIN;

/// Upper bound of a channel whose `max` is not set.
pub const DEFAULT_CHANNEL_MAX: f32 = knob_bounds::DEFAULT_MAX;

/// Channel names created when the settings file lists none.
pub const DEFAULT_CHANNEL_NAMES: [&str; 4] = ["Gain", "Pan", "Reverb", "Delay"];

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_KNOB_SIZE > 0.0);
    assert!(MIN_KNOB_SIZE < DEFAULT_KNOB_SIZE);
    assert!(MAX_KNOB_SIZE > DEFAULT_KNOB_SIZE);

    assert!(DEFAULT_CHANNEL_MIN < DEFAULT_CHANNEL_MAX);
};
