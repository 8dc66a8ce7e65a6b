// SPDX-License-Identifier: MPL-2.0
//! Application root state for the mixer window.
//!
//! The `App` owns one knob per configured channel and turns knob
//! notifications into channel levels. Knob listeners produce application
//! messages directly, so every notification flows back through `update`.

mod message;
pub mod paths;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::domain::knob::{KnobConfig, NormalizedValue};
use crate::ui::knob::RotaryKnob;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 320;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 240;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// A mixer channel: its name, its knob and the last level the knob reported.
pub struct Channel {
    pub name: String,
    pub knob: RotaryKnob<Message>,
    pub level: NormalizedValue,
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("name", &self.name)
            .field("value", &self.knob.value())
            .field("level", &self.level)
            .finish()
    }
}

/// Root Iced application state.
pub struct App {
    channels: Vec<Channel>,
    theme_mode: ThemeMode,
    knob_size: f32,
    /// Warning from loading the settings file, shown above the mixer.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("channels", &self.channels.len())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // iced 0.14 requires an Fn boot closure; the flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

/// Creates the channel at `index` from a validated knob configuration.
///
/// The knob's construction notification is returned alongside so it can be
/// dispatched like any later one.
fn build_channel(index: usize, name: String, knob_config: KnobConfig) -> (Channel, Message) {
    let (knob, initial) = RotaryKnob::with_listener(knob_config, move |level| {
        Message::LevelChanged { index, level }
    });
    let channel = Channel {
        name,
        knob,
        level: NormalizedValue::default(),
    };
    (channel, initial)
}

impl App {
    /// Loads the settings file and builds the mixer from it.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if config_warning.is_none() {
            if let Err(err) = config::init_if_missing(&config) {
                tracing::warn!(error = %err, "could not write default settings");
            }
        }
        let (mut app, initial) = Self::from_config(&config);
        app.config_warning = config_warning;
        if let Some(theme_mode) = flags.theme {
            app.theme_mode = theme_mode;
        }

        tracing::info!(channels = app.channels.len(), "mixer ready");
        (app, Task::batch(initial.into_iter().map(Task::done)))
    }

    /// Builds the mixer state and the initial knob notifications.
    ///
    /// Channels with invalid ranges are left out; the remaining channels are
    /// renumbered so indices stay contiguous.
    pub fn from_config(config: &Config) -> (Self, Vec<Message>) {
        let (channels, initial): (Vec<_>, Vec<_>) = config
            .channels
            .iter()
            .filter_map(|channel| match channel.knob_config() {
                Ok(knob_config) => Some((channel.name.clone(), knob_config)),
                Err(err) => {
                    tracing::warn!(channel = %channel.name, error = %err, "skipping channel");
                    None
                }
            })
            .enumerate()
            .map(|(index, (name, knob_config))| build_channel(index, name, knob_config))
            .unzip();

        let app = Self {
            channels,
            theme_mode: config.general.theme_mode,
            knob_size: config.display.knob_size(),
            config_warning: None,
        };
        (app, initial)
    }

    /// Returns the mixer channels in display order.
    #[must_use]
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    fn title(&self) -> String {
        String::from("Iced Knob Mixer")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match self.dispatch(message) {
            Some(next) => Task::done(next),
            None => Task::none(),
        }
    }

    /// Applies a message and returns the follow-up knob notification, if any.
    pub fn dispatch(&mut self, message: Message) -> Option<Message> {
        match message {
            Message::Knob { index, input } => self.channels.get_mut(index)?.knob.handle(input),
            Message::LevelChanged { index, level } => {
                let channel = self.channels.get_mut(index)?;
                channel.level = level;
                tracing::debug!(channel = %channel.name, level = level.value(), "level changed");
                None
            }
            Message::Reset(index) => {
                let channel = self.channels.get_mut(index)?;
                let default_value = channel.knob.config().default_value();
                tracing::debug!(channel = %channel.name, default_value, "reset channel");
                channel.knob.set_value(default_value)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            channels: &self.channels,
            knob_size: self.knob_size,
            config_warning: self.config_warning.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChannelConfig;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::knob;
    use iced::{Point, Rectangle};

    const BOUNDS: Rectangle = Rectangle {
        x: 0.0,
        y: 0.0,
        width: 100.0,
        height: 100.0,
    };

    fn app_with_initial_levels(config: &Config) -> App {
        let (mut app, initial) = App::from_config(config);
        for message in initial {
            assert!(app.dispatch(message).is_none());
        }
        app
    }

    fn drain(app: &mut App, message: Message) {
        let mut next = Some(message);
        while let Some(message) = next {
            next = app.dispatch(message);
        }
    }

    #[test]
    fn default_config_builds_four_centered_channels() {
        let app = app_with_initial_levels(&Config::default());

        let names: Vec<_> = app.channels().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Gain", "Pan", "Reverb", "Delay"]);
        for channel in app.channels() {
            assert_abs_diff_eq!(channel.level.value(), 50.0);
            assert_eq!(channel.knob.face().label, "50");
        }
    }

    #[test]
    fn initial_notifications_match_channels() {
        let (app, initial) = App::from_config(&Config::default());
        assert_eq!(initial.len(), app.channels().len());
        assert!(matches!(
            initial[2],
            Message::LevelChanged { index: 2, .. }
        ));
    }

    #[test]
    fn invalid_channel_is_skipped_and_indices_stay_contiguous() {
        let config = Config {
            channels: vec![
                ChannelConfig {
                    min: Some(10.0),
                    max: Some(0.0),
                    ..ChannelConfig::named("Broken")
                },
                ChannelConfig::named("Gain"),
            ],
            ..Config::default()
        };
        let (app, initial) = App::from_config(&config);

        assert_eq!(app.channels().len(), 1);
        assert_eq!(app.channels()[0].name, "Gain");
        assert!(matches!(initial[0], Message::LevelChanged { index: 0, .. }));
    }

    #[test]
    fn drag_updates_channel_level() {
        let mut app = app_with_initial_levels(&Config::default());
        let center = BOUNDS.center();

        drain(
            &mut app,
            Message::Knob {
                index: 1,
                input: knob::Message::Pressed {
                    position: Point::new(center.x + 30.0, center.y + 30.0),
                    bounds: BOUNDS,
                },
            },
        );

        // 45° below the horizontal: three quarters of the span.
        assert!(app.channels()[1].knob.is_dragging());
        assert_abs_diff_eq!(app.channels()[1].level.value(), 66.666_67, epsilon = 0.001);
        assert_abs_diff_eq!(app.channels()[0].level.value(), 50.0);

        drain(
            &mut app,
            Message::Knob {
                index: 1,
                input: knob::Message::Released,
            },
        );
        assert!(!app.channels()[1].knob.is_dragging());
    }

    #[test]
    fn reset_restores_default_and_notifies() {
        let config = Config {
            channels: vec![ChannelConfig {
                min: Some(-24.0),
                max: Some(24.0),
                default_value: Some(0.0),
                ..ChannelConfig::named("Gain")
            }],
            ..Config::default()
        };
        let mut app = app_with_initial_levels(&config);
        app.channels[0].knob.set_value(24.0);

        let next = app.dispatch(Message::Reset(0));
        assert!(matches!(next, Some(Message::LevelChanged { index: 0, .. })));
        if let Some(message) = next {
            drain(&mut app, message);
        }

        assert_abs_diff_eq!(app.channels()[0].knob.value(), 0.0);
        assert_abs_diff_eq!(app.channels()[0].level.value(), 50.0);
    }

    #[test]
    fn messages_for_unknown_channels_are_ignored() {
        let mut app = app_with_initial_levels(&Config::default());
        assert!(app.dispatch(Message::Reset(99)).is_none());
        assert!(app
            .dispatch(Message::Knob {
                index: 99,
                input: knob::Message::Released,
            })
            .is_none());
    }

    #[test]
    fn knob_size_comes_from_display_settings() {
        let mut config = Config::default();
        config.display.knob_size = Some(10_000.0);
        let (app, _) = App::from_config(&config);
        assert_abs_diff_eq!(app.knob_size, config::MAX_KNOB_SIZE);
    }
}
