// SPDX-License-Identifier: MPL-2.0
//! Rotary knob state and drag interaction.

use super::face::KnobFace;
use crate::domain::knob::{mapping, KnobConfig, NormalizedValue};
use iced::{Point, Rectangle};
use std::fmt;

/// Listener turning a normalized value into the caller's output type.
pub type OnChange<Output> = Box<dyn Fn(NormalizedValue) -> Output>;

/// Drag phase of a knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Dragging,
}

/// Pointer input routed to a knob.
///
/// Positions are window coordinates; `bounds` is the knob's current
/// on-screen rectangle, so the center is always recomputed from layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Mouse button or finger pressed on the knob.
    Pressed { position: Point, bounds: Rectangle },
    /// Mouse or finger moved anywhere in the window.
    Moved { position: Point, bounds: Rectangle },
    /// Mouse button released or finger lifted anywhere in the window.
    Released,
}

/// A knob mapping pointer angle to a value in a fixed range.
///
/// `Output` is whatever the change listener produces, typically an
/// application message. Every value assignment, including the one made at
/// construction and each drag step, yields a notification even when the
/// value did not change.
pub struct RotaryKnob<Output> {
    config: KnobConfig,
    value: f32,
    interaction: Interaction,
    on_change: Option<OnChange<Output>>,
}

impl<Output> fmt::Debug for RotaryKnob<Output> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotaryKnob")
            .field("config", &self.config)
            .field("value", &self.value)
            .field("interaction", &self.interaction)
            .field("has_listener", &self.on_change.is_some())
            .finish()
    }
}

impl<Output> RotaryKnob<Output> {
    /// Creates a knob without a change listener, set to the configured default.
    #[must_use]
    pub fn new(config: KnobConfig) -> Self {
        let range = config.range();
        let mut knob = Self {
            config,
            value: range.min(),
            interaction: Interaction::Idle,
            on_change: None,
        };
        knob.apply(config.default_value());
        knob
    }

    /// Creates a knob with a change listener.
    ///
    /// Returns the knob together with the listener's output for the initial
    /// value, which callers should dispatch like any other notification.
    pub fn with_listener<F>(config: KnobConfig, on_change: F) -> (Self, Output)
    where
        F: Fn(NormalizedValue) -> Output + 'static,
    {
        let mut knob = Self::new(config);
        let initial = on_change(knob.normalized_value());
        knob.on_change = Some(Box::new(on_change));
        (knob, initial)
    }

    /// Assigns a value, clamping it into the range.
    ///
    /// NaN leaves the stored value untouched. The listener is notified on
    /// every call.
    pub fn set_value(&mut self, value: f32) -> Option<Output> {
        let normalized = self.apply(value);
        self.on_change
            .as_ref()
            .map(|on_change| on_change(normalized))
    }

    /// Routes pointer input through the drag state machine.
    ///
    /// Returns the listener's output when the value was recomputed.
    pub fn handle(&mut self, message: Message) -> Option<Output> {
        match message {
            Message::Pressed { position, bounds } => {
                if self.interaction == Interaction::Idle {
                    tracing::debug!(value = self.value, "knob drag started");
                }
                self.interaction = Interaction::Dragging;
                self.drag_to(position, bounds)
            }
            Message::Moved { position, bounds } => match self.interaction {
                Interaction::Idle => None,
                Interaction::Dragging => self.drag_to(position, bounds),
            },
            Message::Released => {
                if self.interaction == Interaction::Dragging {
                    tracing::debug!(value = self.value, "knob drag ended");
                }
                self.interaction = Interaction::Idle;
                None
            }
        }
    }

    /// Returns the current value, always within the configured range.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Returns the current value as a percentage of the range.
    #[must_use]
    pub fn normalized_value(&self) -> NormalizedValue {
        NormalizedValue::from_fraction(self.config.range().fraction_of(self.value))
    }

    /// Returns whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.interaction == Interaction::Dragging
    }

    /// Returns the current drag phase.
    #[must_use]
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Returns the configuration the knob was built with.
    #[must_use]
    pub fn config(&self) -> &KnobConfig {
        &self.config
    }

    /// Returns the rotation, label and active marker for rendering.
    #[must_use]
    pub fn face(&self) -> KnobFace {
        KnobFace {
            rotation: mapping::value_to_angle(self.value, self.config.range()),
            label: mapping::round_half_up(self.value).to_string(),
            active: self.is_dragging(),
        }
    }

    fn apply(&mut self, value: f32) -> NormalizedValue {
        if !value.is_nan() {
            self.value = self.config.range().clamp(value);
        }
        self.normalized_value()
    }

    fn drag_to(&mut self, position: Point, bounds: Rectangle) -> Option<Output> {
        let center = bounds.center();
        let value = mapping::pointer_to_value(
            (center.x, center.y),
            (position.x, position.y),
            self.config.range(),
        );
        self.set_value(value)
    }
}
