//! Toast notifications
//!
//! A toast is a one-line message shown above the footer until the next key
//! press.

use iocraft::prelude::*;

/// A toast notification message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Shown before the message, e.g. `Success`
    pub heading: String,
    pub message: String,
    pub level: ToastLevel,
}

/// Severity level for toast notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
    Success,
}

impl ToastLevel {
    fn default_heading(self) -> &'static str {
        match self {
            ToastLevel::Info => "Info",
            ToastLevel::Error => "Error",
            ToastLevel::Success => "Success",
        }
    }
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            heading: level.default_heading().to_string(),
            message: message.into(),
            level,
        }
    }

    /// Replace the level's default heading
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = heading.into();
        self
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Error)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Success)
    }

    /// Get the color associated with this toast's level
    pub fn color(&self) -> Color {
        match self.level {
            ToastLevel::Info => Color::Cyan,
            ToastLevel::Error => Color::Red,
            ToastLevel::Success => Color::Green,
        }
    }
}

/// Render a toast notification as an optional element
pub fn render_toast(toast: &Option<Toast>) -> Option<AnyElement<'static>> {
    toast.as_ref().map(|t| {
        element! {
            View(
                width: 100pct,
                height: 3,
                flex_shrink: 0.0,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                background_color: Color::Black,
                border_edges: Edges::Top,
                border_style: BorderStyle::Single,
                border_color: t.color(),
            ) {
                Text(
                    content: format!("{}: {}", t.heading, t.message),
                    color: t.color(),
                )
            }
        }
        .into_any()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_levels() {
        let toast = Toast::success("Ticket added successfully!");
        assert_eq!(toast.level, ToastLevel::Success);
        assert_eq!(toast.heading, "Success");
        assert_eq!(toast.color(), Color::Green);

        assert_eq!(Toast::error("x").heading, "Error");
        assert_eq!(Toast::info("x").heading, "Info");
        assert_eq!(Toast::info("x").color(), Color::Cyan);
    }

    #[test]
    fn test_custom_heading_keeps_level() {
        let toast =
            Toast::info("Would edit ticket: Crash on startup").with_heading("Edit Feature");
        assert_eq!(toast.heading, "Edit Feature");
        assert_eq!(toast.level, ToastLevel::Info);
        assert_eq!(toast.color(), Color::Cyan);
        assert_ne!(toast, Toast::info("Would edit ticket: Crash on startup"));
    }
}
