// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core knob logic with ZERO external dependencies.
//!
//! This module contains pure value objects and the geometry that maps a
//! pointer position onto a bounded value. It has no dependencies on external
//! crates (except `std`) so it can be tested without a renderer.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`KnobError`](error::KnobError))
//! - [`knob`]: Knob value objects ([`KnobRange`](knob::KnobRange),
//!   [`NormalizedValue`](knob::NormalizedValue)) and the
//!   [`mapping`](knob::mapping) functions

pub mod error;
pub mod knob;
