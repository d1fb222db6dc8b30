//! Color theme and styling definitions using ratatui colors
//!
//! The default palette follows the portfolio site: navy background, light slate text
//! and a teal accent.

use ratatui::style::{Color, Modifier, Style};

const NAVY: Color = Color::Rgb(10, 25, 47);
const SLATE: Color = Color::Rgb(204, 214, 246);
const TEAL: Color = Color::Rgb(100, 255, 218);
const DIM_TEAL: Color = Color::Rgb(40, 90, 90);

/// Color theme for terminal UI elements
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTheme {
    /// Section heading
    pub heading: Style,

    /// Slide caption
    pub slide_title: Style,

    /// Slide card border
    pub card_border: Style,

    /// Image reference and asset details
    pub detail_text: Style,

    /// Asset reported missing by the loader
    pub error_text: Style,

    /// Previous/next buttons
    pub button: Style,

    /// Dot of the displayed slide
    pub dot_active: Style,

    /// Other dots
    pub dot_inactive: Style,

    /// Status line background
    pub status_bg: Color,

    /// Status line text
    pub status_fg: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            heading: Style::default().fg(SLATE).add_modifier(Modifier::BOLD),
            slide_title: Style::default().fg(TEAL).add_modifier(Modifier::BOLD),
            card_border: Style::default().fg(TEAL),
            detail_text: Style::default().fg(SLATE),
            error_text: Style::default().fg(Color::LightRed),
            button: Style::default().fg(TEAL),
            dot_active: Style::default().fg(TEAL),
            dot_inactive: Style::default().fg(DIM_TEAL),
            status_bg: NAVY,
            status_fg: SLATE,
        }
    }
}

impl ColorTheme {
    /// Create a monochrome theme for terminals without color support
    pub fn monochrome() -> Self {
        Self {
            heading: Style::default().add_modifier(Modifier::BOLD),
            slide_title: Style::default().add_modifier(Modifier::BOLD),
            card_border: Style::default(),
            detail_text: Style::default(),
            error_text: Style::default().add_modifier(Modifier::REVERSED),
            button: Style::default(),
            dot_active: Style::default().add_modifier(Modifier::BOLD),
            dot_inactive: Style::default().add_modifier(Modifier::DIM),
            status_bg: Color::Black,
            status_fg: Color::White,
        }
    }

    /// Create a high-contrast theme for accessibility
    pub fn high_contrast() -> Self {
        Self {
            heading: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            slide_title: Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
            card_border: Style::default().fg(Color::White),
            detail_text: Style::default().fg(Color::White),
            error_text: Style::default().fg(Color::LightRed),
            button: Style::default().fg(Color::LightYellow),
            dot_active: Style::default().fg(Color::LightYellow),
            dot_inactive: Style::default().fg(Color::Gray),
            status_bg: Color::White,
            status_fg: Color::Black,
        }
    }

    /// Look a theme up by its settings/CLI name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default()),
            "monochrome" => Some(Self::monochrome()),
            "high-contrast" | "high_contrast" => Some(Self::high_contrast()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = ColorTheme::default();
        assert_eq!(theme.status_bg, NAVY);
        assert_eq!(theme.dot_active.fg, Some(TEAL));
        assert!(theme.slide_title.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_monochrome_theme() {
        let theme = ColorTheme::monochrome();
        assert_eq!(theme.dot_active.fg, None);
        assert_eq!(theme.status_fg, Color::White);
        assert!(theme.dot_inactive.add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_high_contrast_theme() {
        let theme = ColorTheme::high_contrast();
        assert_eq!(theme.status_bg, Color::White);
        assert_eq!(theme.status_fg, Color::Black);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(ColorTheme::from_name("default"), Some(ColorTheme::default()));
        assert_eq!(
            ColorTheme::from_name("high-contrast"),
            Some(ColorTheme::high_contrast())
        );
        assert_eq!(ColorTheme::from_name("neon"), None);
    }
}
