//! Theme color definitions for the UI
//!
//! Provides dark and light color palettes selected from the config.

use crate::config::Theme;
use crate::typing::CharClass;
use ratatui::style::Color;

/// Complete color palette for the UI
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// Primary foreground text
    pub fg: Color,
    /// Dimmed/secondary text
    pub dim: Color,
    /// Accent color (headings, active tab, last key)
    pub accent: Color,
    /// Completion badge
    pub green: Color,
    /// Mistyped characters
    pub red: Color,
    /// Key idle background
    pub key_off: Color,
    /// Key held background
    pub key_on: Color,
    /// Key pressed at least once
    pub key_tested: Color,
    /// Key label text (idle)
    pub key_text: Color,
    /// Key label text (held)
    pub key_text_on: Color,
    /// Correctly typed characters
    pub typed: Color,
    /// Characters not yet reached
    pub untyped: Color,
    /// Cursor block background
    pub cursor: Color,
}

impl ThemeColors {
    /// Create a color palette for the given theme variant
    pub fn from_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(200, 200, 210),
            dim: Color::Rgb(90, 90, 110),
            accent: Color::Rgb(129, 140, 248),
            green: Color::Rgb(74, 222, 128),
            red: Color::Rgb(239, 68, 68),
            key_off: Color::Rgb(30, 35, 50),
            key_on: Color::Rgb(99, 102, 241),
            key_tested: Color::Rgb(49, 46, 129),
            key_text: Color::Rgb(148, 163, 184),
            key_text_on: Color::Rgb(255, 255, 255),
            typed: Color::Rgb(226, 232, 240),
            untyped: Color::Rgb(71, 85, 105),
            cursor: Color::Rgb(99, 102, 241),
        }
    }

    /// High contrast for bright terminals
    pub fn light() -> Self {
        Self {
            fg: Color::Rgb(30, 30, 40),
            dim: Color::Rgb(130, 130, 150),
            accent: Color::Rgb(67, 56, 202),
            green: Color::Rgb(22, 163, 74),
            red: Color::Rgb(200, 30, 40),
            key_off: Color::Rgb(220, 220, 228),
            key_on: Color::Rgb(79, 70, 229),
            key_tested: Color::Rgb(199, 210, 254),
            key_text: Color::Rgb(50, 50, 60),
            key_text_on: Color::Rgb(255, 255, 255),
            typed: Color::Rgb(30, 30, 40),
            untyped: Color::Rgb(160, 160, 175),
            cursor: Color::Rgb(79, 70, 229),
        }
    }

    /// (foreground, background) for a prompt character
    pub fn char_colors(&self, class: CharClass) -> (Color, Option<Color>) {
        match class {
            CharClass::TypedCorrect => (self.typed, None),
            CharClass::TypedIncorrect => (self.red, None),
            CharClass::Cursor => (Color::Black, Some(self.cursor)),
            CharClass::Untyped => (self.untyped, None),
        }
    }
}
