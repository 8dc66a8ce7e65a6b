// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down, messages
//! up" pattern.
//!
//! - [`knob`] - Rotary knob state and drag interaction
//! - [`widgets`] - Canvas program drawing the knob
//! - [`design_tokens`] - Design system constants (colors, spacing, strokes)
//! - [`theming`] - Light/Dark/System theme mode and knob color schemes

pub mod design_tokens;
pub mod knob;
pub mod theming;
pub mod widgets;
