// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::knob::NormalizedValue;
use crate::ui::knob;
use crate::ui::theming::ThemeMode;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer input for the knob of a channel.
    Knob { index: usize, input: knob::Message },
    /// A channel knob reported a new level.
    LevelChanged {
        index: usize,
        level: NormalizedValue,
    },
    /// Put a channel back to its configured default value.
    Reset(usize),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_KNOB_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional theme override; takes precedence over the settings file.
    pub theme: Option<ThemeMode>,
}
