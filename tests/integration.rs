// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use iced::{Point, Rectangle};
use iced_knob::app::{App, Message};
use iced_knob::config::{self, ChannelConfig, Config};
use iced_knob::domain::error::KnobError;
use iced_knob::domain::knob::{KnobConfig, KnobRange, NormalizedValue};
use iced_knob::ui::knob::{self, RotaryKnob};
use iced_knob::ui::theming::ThemeMode;
use std::cell::RefCell;
use std::rc::Rc;
use tempfile::tempdir;

const BOUNDS: Rectangle = Rectangle {
    x: 20.0,
    y: 20.0,
    width: 60.0,
    height: 60.0,
};

fn at_angle(degrees: f32) -> Point {
    let center = BOUNDS.center();
    let radians = degrees.to_radians();
    Point::new(
        center.x + 25.0 * radians.cos(),
        center.y + 25.0 * radians.sin(),
    )
}

#[test]
fn listener_sees_every_notification_of_a_drag() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let config = KnobConfig::default().with_default_value(50.0);
    let (mut knob, ()) = RotaryKnob::with_listener(config, move |level: NormalizedValue| {
        sink.borrow_mut().push(level.value());
    });

    knob.handle(knob::Message::Pressed {
        position: at_angle(-135.0),
        bounds: BOUNDS,
    });
    knob.handle(knob::Message::Moved {
        position: at_angle(0.0),
        bounds: BOUNDS,
    });
    knob.handle(knob::Message::Moved {
        position: at_angle(135.0),
        bounds: BOUNDS,
    });
    knob.handle(knob::Message::Released);
    knob.handle(knob::Message::Moved {
        position: at_angle(-90.0),
        bounds: BOUNDS,
    });

    let seen = seen.borrow();
    assert_eq!(seen.len(), 4);
    let expected = [50.0, 0.0, 50.0, 100.0];
    for (actual, expected) in seen.iter().zip(expected) {
        assert_abs_diff_eq!(*actual, expected, epsilon = 0.001);
    }
    assert_eq!(knob.face().label, "100");
}

#[test]
fn custom_range_reports_percentages() {
    let range = KnobRange::new(-60.0, 0.0).expect("valid range");
    let (mut knob, initial) =
        RotaryKnob::with_listener(KnobConfig::new(range), NormalizedValue::value);

    assert_abs_diff_eq!(initial, 50.0);
    assert_eq!(knob.face().label, "-30");

    assert_eq!(knob.set_value(-45.0), Some(25.0));
    assert_eq!(knob.face().label, "-45");
}

#[test]
fn invalid_ranges_are_rejected() {
    assert_eq!(
        KnobRange::new(1.0, 1.0),
        Err(KnobError::InvalidRange { min: 1.0, max: 1.0 })
    );
    assert!(matches!(
        KnobRange::new(0.0, f32::INFINITY),
        Err(KnobError::NonFinite { .. })
    ));
    assert!(matches!(
        KnobRange::new(-3e38, 3e38),
        Err(KnobError::SpanOverflow { .. })
    ));
}

#[test]
fn saved_settings_drive_the_mixer() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.theme_mode = ThemeMode::Dark;
    config.display.knob_size = Some(128.0);
    config.channels = vec![
        ChannelConfig {
            min: Some(-12.0),
            max: Some(12.0),
            default_value: Some(6.0),
            ..ChannelConfig::named("Bass")
        },
        ChannelConfig::named("Treble"),
    ];
    config::save_to_path(&config, &path).expect("failed to save settings");

    let loaded = config::load_from_path(&path).expect("failed to load settings");
    assert_eq!(loaded, config);

    let (mut app, initial) = App::from_config(&loaded);
    for message in initial {
        assert!(app.dispatch(message).is_none());
    }

    let bass = &app.channels()[0];
    assert_eq!(bass.name, "Bass");
    assert_eq!(bass.knob.face().label, "6");
    assert_abs_diff_eq!(bass.level.value(), 75.0);

    let next = app.dispatch(Message::Knob {
        index: 1,
        input: knob::Message::Pressed {
            position: at_angle(-135.0),
            bounds: BOUNDS,
        },
    });
    if let Some(message) = next {
        assert!(app.dispatch(message).is_none());
    }
    assert_abs_diff_eq!(app.channels()[1].level.value(), 0.0, epsilon = 0.001);
}

#[test]
fn load_with_missing_file_falls_back_to_defaults() {
    let dir = tempdir().expect("failed to create temp dir");
    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config, Config::default());
    assert!(warning.is_none());
}

#[test]
fn load_with_malformed_file_warns() {
    let dir = tempdir().expect("failed to create temp dir");
    std::fs::write(dir.path().join("settings.toml"), "channels = 3").expect("write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config, Config::default());
    assert!(warning.is_some());
}
