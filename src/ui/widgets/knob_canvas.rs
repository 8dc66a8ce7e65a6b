// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing a rotary knob and feeding it pointer input.
//!
//! A canvas sees every window event, not only those over its bounds, so a
//! drag keeps tracking the pointer after it leaves the knob. Nothing is
//! registered outside the widget tree: input routing ends when the canvas
//! leaves the view.

use crate::domain::knob::{knob_bounds, KnobAngle};
use crate::ui::design_tokens::{spacing, stroke, typography};
use crate::ui::knob::{self, KnobFace, RotaryKnob};
use crate::ui::theming::KnobColors;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::{text, Column};
use iced::{mouse, touch, Alignment, Element, Event, Length, Point, Rectangle, Renderer, Theme};

/// Number of line segments used to approximate the full track arc.
const ARC_SEGMENTS: usize = 48;

/// Canvas program for one knob.
pub struct KnobCanvas<'a, Output, Message> {
    knob: &'a RotaryKnob<Output>,
    on_input: Box<dyn Fn(knob::Message) -> Message + 'a>,
}

impl<'a, Output, Message> KnobCanvas<'a, Output, Message> {
    /// Creates a canvas for `knob`, wrapping its pointer input with `on_input`.
    pub fn new(
        knob: &'a RotaryKnob<Output>,
        on_input: impl Fn(knob::Message) -> Message + 'a,
    ) -> Self {
        Self {
            knob,
            on_input: Box::new(on_input),
        }
    }
}

impl<Output, Message> canvas::Program<Message> for KnobCanvas<'_, Output, Message> {
    /// Finger driving the current touch drag.
    type State = Option<touch::Finger>;

    fn update(
        &self,
        finger: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        let input = pointer_input(event, bounds, cursor, self.knob.is_dragging(), finger)?;
        Some(Action::publish((self.on_input)(input)).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        draw_face(&mut frame, &self.knob.face(), KnobColors::for_theme(theme));
        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.knob.is_dragging() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Translates a window event into knob input.
///
/// Presses only count over the knob; moves and releases count anywhere in
/// the window but only while a drag is in progress. A touch drag follows the
/// finger that started it and ignores every other finger.
fn pointer_input(
    event: &Event,
    bounds: Rectangle,
    cursor: mouse::Cursor,
    dragging: bool,
    finger: &mut Option<touch::Finger>,
) -> Option<knob::Message> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            let position = cursor.position_over(bounds)?;
            *finger = None;
            Some(knob::Message::Pressed { position, bounds })
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) if dragging => {
            Some(knob::Message::Moved {
                position: *position,
                bounds,
            })
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if dragging => {
            Some(knob::Message::Released)
        }
        Event::Touch(touch::Event::FingerPressed { id, position })
            if bounds.contains(*position) && !(dragging && finger.is_some()) =>
        {
            *finger = Some(*id);
            Some(knob::Message::Pressed {
                position: *position,
                bounds,
            })
        }
        Event::Touch(touch::Event::FingerMoved { id, position })
            if dragging && *finger == Some(*id) =>
        {
            Some(knob::Message::Moved {
                position: *position,
                bounds,
            })
        }
        Event::Touch(
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
        ) if dragging && *finger == Some(*id) => {
            *finger = None;
            Some(knob::Message::Released)
        }
        _ => None,
    }
}

/// Point on a circle at a knob rotation (0° up, clockwise).
fn point_at(center: Point, radius: f32, rotation_degrees: f32) -> Point {
    let radians = rotation_degrees.to_radians();
    Point::new(
        center.x + radius * radians.sin(),
        center.y - radius * radians.cos(),
    )
}

/// Builds an arc between two knob rotations from straight segments.
// Sweep never exceeds the knob span, so the segment count stays small.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn arc(center: Point, radius: f32, from_degrees: f32, to_degrees: f32) -> Path {
    let sweep = (to_degrees - from_degrees).abs();
    let segments = ((sweep / KnobAngle::span()) * ARC_SEGMENTS as f32).ceil().max(1.0) as usize;

    let mut builder = canvas::path::Builder::new();
    builder.move_to(point_at(center, radius, from_degrees));
    for i in 1..=segments {
        let t = i as f32 / segments as f32;
        let angle = from_degrees + (to_degrees - from_degrees) * t;
        builder.line_to(point_at(center, radius, angle));
    }
    builder.build()
}

fn draw_face(frame: &mut Frame, face: &KnobFace, colors: KnobColors) {
    let center = frame.center();
    let outer = frame.width().min(frame.height()) / 2.0 - stroke::TRACK;
    let body_radius = outer - spacing::XS;
    if body_radius <= 0.0 {
        return;
    }

    // Track over the full span, then the filled part up to the current rotation.
    frame.stroke(
        &arc(center, outer, knob_bounds::MIN_ANGLE, knob_bounds::MAX_ANGLE),
        Stroke::default()
            .with_width(stroke::TRACK)
            .with_color(colors.track)
            .with_line_cap(canvas::LineCap::Round),
    );
    let rotation = face.rotation.degrees();
    if rotation > knob_bounds::MIN_ANGLE {
        frame.stroke(
            &arc(center, outer, knob_bounds::MIN_ANGLE, rotation),
            Stroke::default()
                .with_width(stroke::VALUE)
                .with_color(colors.value)
                .with_line_cap(canvas::LineCap::Round),
        );
    }

    let body = Path::circle(center, body_radius);
    frame.fill(&body, colors.body);
    let (ring_width, ring_color) = if face.active {
        (stroke::RING_ACTIVE, colors.ring_active)
    } else {
        (stroke::RING, colors.ring)
    };
    frame.stroke(
        &body,
        Stroke::default().with_width(ring_width).with_color(ring_color),
    );

    let (dx, dy) = face.indicator_direction();
    let indicator = Path::line(
        Point::new(
            center.x + dx * body_radius * 0.45,
            center.y + dy * body_radius * 0.45,
        ),
        Point::new(
            center.x + dx * body_radius * 0.85,
            center.y + dy * body_radius * 0.85,
        ),
    );
    frame.stroke(
        &indicator,
        Stroke::default()
            .with_width(stroke::VALUE)
            .with_color(colors.value)
            .with_line_cap(canvas::LineCap::Round),
    );
}

/// Knob canvas of diameter `size` with its value label underneath.
pub fn knob_view<'a, Output: 'a, Message: 'a>(
    knob: &'a RotaryKnob<Output>,
    size: f32,
    on_input: impl Fn(knob::Message) -> Message + 'a,
) -> Element<'a, Message> {
    let label = knob.face().label;
    let canvas = Canvas::new(KnobCanvas::new(knob, on_input))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size));

    Column::new()
        .push(canvas)
        .push(
            text(label)
                .size(typography::BODY_LG)
                .style(|theme: &Theme| text::Style {
                    color: Some(KnobColors::for_theme(theme).text),
                }),
        )
        .spacing(spacing::XXS)
        .align_x(Alignment::Center)
        .into()
}
