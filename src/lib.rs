// SPDX-License-Identifier: MPL-2.0
//! `iced_knob` is a draggable rotary knob for the Iced GUI framework.
//!
//! The knob maps the angle between its center and the pointer onto a bounded
//! value, shows the rounded value and reports it to a listener as a 0–100
//! percentage. A small mixer application built on it ships as the
//! `iced_knob` binary.

#![doc(html_root_url = "https://docs.rs/iced_knob/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

#[cfg(test)]
mod test_utils;
