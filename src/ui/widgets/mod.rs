// SPDX-License-Identifier: MPL-2.0
pub mod knob_canvas;

pub use knob_canvas::{knob_view, KnobCanvas};
