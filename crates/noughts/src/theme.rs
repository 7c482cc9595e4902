//! Light/dark colour schemes. Purely presentational.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Brand blue, used for the title and the New Game button.
pub const PRIMARY: Color = Color::Rgb(0x19, 0x76, 0xd2);
/// Dark grey, used for O and the Reset Board button.
pub const SECONDARY: Color = Color::Rgb(0x42, 0x42, 0x42);
/// Amber, used for X, the winner banner and the selected symbol.
pub const ACCENT: Color = Color::Rgb(0xfb, 0xc0, 0x2d);

/// Which colour scheme is active.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    /// Light background.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

impl Theme {
    /// Returns the other theme.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Caption for the toggle button: names the theme it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "🌙 Dark",
            Theme::Dark => "☀️ Light",
        }
    }

    /// Colours for this theme.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: Color::Rgb(0xff, 0xff, 0xff),
                foreground: Color::Rgb(0x28, 0x2c, 0x34),
                border: Color::Rgb(0xe9, 0xec, 0xef),
                muted: Color::Rgb(0xad, 0xb5, 0xbd),
                x_mark: ACCENT,
                o_mark: SECONDARY,
            },
            Theme::Dark => Palette {
                background: Color::Rgb(0x1a, 0x1a, 0x1a),
                foreground: Color::Rgb(0xff, 0xff, 0xff),
                border: Color::Rgb(0x40, 0x40, 0x40),
                muted: Color::Rgb(0x6c, 0x75, 0x7d),
                x_mark: ACCENT,
                o_mark: Color::Rgb(0x9e, 0x9e, 0x9e),
            },
        }
    }
}

/// Resolved colours for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Body text.
    pub foreground: Color,
    /// Block borders and grid lines.
    pub border: Color,
    /// Disabled cells and help text.
    pub muted: Color,
    /// X marks and X's score.
    pub x_mark: Color,
    /// O marks and O's score.
    pub o_mark: Color,
}
