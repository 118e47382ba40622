//! Status display colors
//!
//! Each status maps to a fixed (foreground, background) pair. Both the TUI
//! and the CLI read colors from here.

use std::fmt;

use crate::types::TicketStatus;

/// A 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Hex form, e.g. `#007AFF`
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Foreground and background colors for a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPalette {
    pub foreground: Rgb,
    pub background: Rgb,
}

pub const CREATED_PALETTE: StatusPalette = StatusPalette {
    foreground: Rgb::new(0x00, 0x7A, 0xFF),
    background: Rgb::new(0xE3, 0xF2, 0xFD),
};

pub const UNDER_ASSISTANCE_PALETTE: StatusPalette = StatusPalette {
    foreground: Rgb::new(0xFF, 0x95, 0x00),
    background: Rgb::new(0xFF, 0xF3, 0xE0),
};

pub const COMPLETED_PALETTE: StatusPalette = StatusPalette {
    foreground: Rgb::new(0x34, 0xC7, 0x59),
    background: Rgb::new(0xE8, 0xF5, 0xE8),
};

/// Gray pair for labels outside the status vocabulary
pub const NEUTRAL_PALETTE: StatusPalette = StatusPalette {
    foreground: Rgb::new(0x8E, 0x8E, 0x93),
    background: Rgb::new(0xF2, 0xF2, 0xF7),
};

pub fn status_palette(status: TicketStatus) -> StatusPalette {
    match status {
        TicketStatus::Created => CREATED_PALETTE,
        TicketStatus::UnderAssistance => UNDER_ASSISTANCE_PALETTE,
        TicketStatus::Completed => COMPLETED_PALETTE,
    }
}

/// Palette for a raw status label, neutral when the label is unknown
pub fn palette_for_label(label: &str) -> StatusPalette {
    label
        .parse::<TicketStatus>()
        .map(status_palette)
        .unwrap_or(NEUTRAL_PALETTE)
}
