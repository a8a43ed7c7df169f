//! Color themes
//!
//! Two schemes, toggled at runtime and persisted in config alongside the
//! locale. Components never name raw colors for chrome; they take a
//! `Palette` resolved from the active theme. The splash keeps its fixed
//! branding colors.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Supported color schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The theme the toggle switches to
    pub fn other(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Dark => Palette {
                accent: Color::Cyan,
                secondary: Color::Magenta,
                highlight: Color::Yellow,
                success: Color::Green,
                danger: Color::Red,
                text: Color::White,
                subtle: Color::Gray,
                muted: Color::DarkGray,
                inverse: Color::Black,
            },
            // Tuned for light terminal backgrounds: dark text, darker
            // accent hues, no yellow-on-white
            Theme::Light => Palette {
                accent: Color::Blue,
                secondary: Color::Rgb(140, 30, 140),
                highlight: Color::Rgb(176, 104, 0),
                success: Color::Rgb(0, 128, 0),
                danger: Color::Rgb(190, 20, 20),
                text: Color::Black,
                subtle: Color::DarkGray,
                muted: Color::Gray,
                inverse: Color::White,
            },
        }
    }
}

/// Resolved colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Borders and titles of active panels
    pub accent: Color,
    /// The previous-estimation panel
    pub secondary: Color,
    /// Focus markers, key hints, the pending spinner
    pub highlight: Color,
    pub success: Color,
    pub danger: Color,
    /// Primary foreground
    pub text: Color,
    /// De-emphasized foreground
    pub subtle: Color,
    /// Hints, placeholders, inactive borders
    pub muted: Color,
    /// Foreground on accent-colored backgrounds
    pub inverse: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Theme::default().palette()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_alternates() {
        assert_eq!(Theme::Dark.other(), Theme::Light);
        assert_eq!(Theme::Light.other(), Theme::Dark);
    }

    #[test]
    fn test_palettes_differ() {
        let dark = Theme::Dark.palette();
        let light = Theme::Light.palette();
        assert_ne!(dark.text, light.text);
        assert_ne!(dark.accent, light.accent);
        // Light never paints yellow on a light background
        assert_ne!(light.highlight, Color::Yellow);
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        let parsed: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(parsed, Theme::Dark);
    }
}
