//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Line colors used when a plot is built without an explicit palette.
pub const DEFAULT_LINE_COLORS: [Color; 7] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
];

/// Axis color used when a plot is built without an explicit theme.
pub const DEFAULT_AXES_COLOR: Color = Color::White;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Border color.
    pub border: Color,
    /// Plot title color.
    pub heading: Color,
    /// Axis lines and tick labels.
    pub axes: Color,
    /// Series colors, assigned by series index.
    pub lines: Vec<Color>,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Error text.
    pub error: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                border: Color::Rgb(102, 92, 84),
                heading: Color::Rgb(251, 184, 108),
                axes: Color::Rgb(168, 153, 132),
                lines: vec![
                    Color::Rgb(251, 73, 52),
                    Color::Rgb(184, 187, 38),
                    Color::Rgb(250, 189, 47),
                    Color::Rgb(131, 165, 152),
                    Color::Rgb(211, 134, 155),
                    Color::Rgb(142, 192, 124),
                    Color::Rgb(254, 128, 25),
                ],
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                error: Color::Rgb(251, 73, 52),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                border: Color::Rgb(213, 196, 161),
                heading: Color::Rgb(175, 58, 3),
                axes: Color::Rgb(124, 111, 100),
                lines: vec![
                    Color::Rgb(157, 0, 6),
                    Color::Rgb(121, 116, 14),
                    Color::Rgb(181, 118, 20),
                    Color::Rgb(7, 102, 120),
                    Color::Rgb(143, 63, 113),
                    Color::Rgb(66, 123, 88),
                    Color::Rgb(175, 58, 3),
                ],
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                error: Color::Rgb(157, 0, 6),
            },
        }
    }
}
