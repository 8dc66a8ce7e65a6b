// SPDX-License-Identifier: MPL-2.0
//! Rotary knob component.
//!
//! A knob maps the angle between its center and the pointer onto a bounded
//! value, shows the rounded value, and notifies a listener with the value
//! normalized to 0–100.
//!
//! ```text
//!            Pressed
//!   Idle ───────────────▶ Dragging ──┐ Moved
//!    ▲                       │  ▲────┘
//!    └──────── Released ─────┘
//! ```
//!
//! Moves and releases while idle are ignored.

mod face;
mod state;

pub use face::KnobFace;
pub use state::{Interaction, Message, OnChange, RotaryKnob};
