//! Theme system for TUI colors and styles
//!
//! Status colors come from the shared palette so the TUI and CLI agree.

use iocraft::prelude::Color;

use crate::palette::{Rgb, StatusPalette, status_palette};
use crate::types::TicketStatus;

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub id_color: Color,
    pub rating: Color,
    pub danger: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header: Rgb::new(0x00, 0x7A, 0xFF).into(),
            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            highlight: Color::Rgb {
                r: 40,
                g: 60,
                b: 90,
            },
            highlight_text: Color::White,
            id_color: Color::Cyan,
            rating: Color::Yellow,
            danger: Color::Rgb {
                r: 0xFF,
                g: 0x3B,
                b: 0x30,
            },
        }
    }
}

impl Theme {
    /// Get the (foreground, background) badge colors for a ticket status
    pub fn status_colors(&self, status: TicketStatus) -> (Color, Color) {
        let StatusPalette {
            foreground,
            background,
        } = status_palette(status);
        (foreground.into(), background.into())
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
