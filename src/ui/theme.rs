use crate::board::BackgroundColor;
use ratatui::style::Color;

pub struct Theme {
    pub primary: Color,  // Blue
    pub accent: Color,   // Orange
    pub comment: Color,  // Grey
    pub error: Color,    // Red
    pub border_focused: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub panel_bg: Color, // Modal sheets and status bar
    pub panel_fg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    primary: Color::Rgb(30, 102, 245),
    accent: Color::Rgb(254, 100, 11),
    comment: Color::Rgb(108, 112, 134),
    error: Color::Rgb(210, 15, 57),
    border_focused: Color::Rgb(223, 142, 29), // Yellow border for focus
    selection_bg: Color::Rgb(30, 102, 245),
    selection_fg: Color::White,
    panel_bg: Color::Rgb(30, 30, 46),
    panel_fg: Color::Rgb(205, 214, 244),
};

/// Colours for drawing on top of the chosen background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backdrop {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
}

impl From<BackgroundColor> for Backdrop {
    fn from(color: BackgroundColor) -> Self {
        let bg = match color {
            BackgroundColor::White => Color::Rgb(255, 255, 255),
            BackgroundColor::Red => Color::Rgb(255, 59, 48),
            BackgroundColor::Blue => Color::Rgb(0, 122, 255),
            BackgroundColor::Green => Color::Rgb(52, 199, 89),
            BackgroundColor::Yellow => Color::Rgb(255, 204, 0),
            BackgroundColor::Orange => Color::Rgb(255, 149, 0),
            BackgroundColor::Pink => Color::Rgb(255, 45, 85),
            BackgroundColor::Gray => Color::Rgb(142, 142, 147),
        };
        // Dark text on the light options, white text on the saturated ones
        let (fg, muted) = match color {
            BackgroundColor::White | BackgroundColor::Yellow | BackgroundColor::Orange => {
                (Color::Black, Color::Rgb(90, 90, 90))
            }
            _ => (Color::White, Color::Rgb(235, 235, 235)),
        };
        Backdrop { bg, fg, muted }
    }
}
