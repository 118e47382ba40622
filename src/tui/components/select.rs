//! Compact inline selector for enum fields
//!
//! Displays as: `Label: ◀ value ▶`. The value is cycled with left/right.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::TicketStatus;

#[derive(Default, Props)]
pub struct SelectProps<'a> {
    pub label: Option<&'a str>,
    pub options: Vec<String>,
    pub selected_index: usize,
    pub has_focus: bool,
    /// Optional colors for the value badge
    pub value_color: Option<Color>,
    pub value_background: Option<Color>,
}

#[component]
pub fn Select<'a>(props: &SelectProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let accent = if props.has_focus {
        theme.border_focused
    } else {
        theme.text_dimmed
    };
    let value_color = props.value_color.unwrap_or(theme.text);

    let current_value = props
        .options
        .get(props.selected_index)
        .cloned()
        .unwrap_or_default();

    element! {
        View(flex_direction: FlexDirection::Row, gap: 1) {
            #(props.label.map(|label| element! {
                Text(content: format!("{}:", label), color: accent)
            }))
            Text(content: "◀", color: accent)
            View(background_color: props.value_background, padding_left: 1, padding_right: 1) {
                Text(content: current_value, color: value_color, weight: Weight::Bold)
            }
            Text(content: "▶", color: accent)
        }
    }
}

/// Types that can be cycled through by a `Select`
pub trait Selectable: Sized + Clone + Copy + 'static {
    fn all_values() -> Vec<Self>;
    fn display(&self) -> String;
    fn index(&self) -> usize;

    /// Next value (wrapping)
    fn next(&self) -> Self {
        let values = Self::all_values();
        values[(self.index() + 1) % values.len()]
    }

    /// Previous value (wrapping)
    fn prev(&self) -> Self {
        let values = Self::all_values();
        let idx = if self.index() == 0 {
            values.len() - 1
        } else {
            self.index() - 1
        };
        values[idx]
    }
}

impl Selectable for TicketStatus {
    fn all_values() -> Vec<Self> {
        TicketStatus::ALL.to_vec()
    }

    fn display(&self) -> String {
        self.label().to_string()
    }

    fn index(&self) -> usize {
        match self {
            TicketStatus::Created => 0,
            TicketStatus::UnderAssistance => 1,
            TicketStatus::Completed => 2,
        }
    }
}

/// Display strings for every value of a `Selectable` type
pub fn options_for<T: Selectable>() -> Vec<String> {
    T::all_values().iter().map(|v| v.display()).collect()
}
