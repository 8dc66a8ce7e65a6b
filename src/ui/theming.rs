// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming for the knob face.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors used to draw a knob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobColors {
    /// Knob body fill.
    pub body: Color,
    /// Knob outline at rest.
    pub ring: Color,
    /// Knob outline while dragging.
    pub ring_active: Color,
    /// Unfilled part of the value track.
    pub track: Color,
    /// Filled part of the value track and the indicator line.
    pub value: Color,
    /// Value label.
    pub text: Color,
}

impl KnobColors {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            body: palette::WHITE,
            ring: palette::GRAY_200,
            ring_active: palette::PRIMARY_600,
            track: palette::GRAY_100,
            value: palette::PRIMARY_500,
            text: palette::GRAY_900,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            body: Color::from_rgb(0.15, 0.15, 0.15),
            ring: palette::GRAY_700,
            ring_active: palette::PRIMARY_400,
            track: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            },
            value: palette::PRIMARY_400,
            text: palette::WHITE,
        }
    }

    /// Picks the scheme matching an iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Returns the iced theme for this mode.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("invalid theme mode: {}", other)),
        }
    }
}
