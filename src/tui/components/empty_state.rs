//! Placeholder shown when the tracker holds no tickets

use iocraft::prelude::*;

use crate::tui::theme::theme;

#[component]
pub fn EmptyState() -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: theme.border,
                margin_bottom: 1,
            ) {
                Text(content: "i", color: theme.text_dimmed, weight: Weight::Bold)
            }
            Text(content: "No Tickets", color: theme.text, weight: Weight::Bold)
            View(margin_top: 1) {
                Text(content: "Your ticket tracker is empty.", color: theme.text_dimmed)
            }
            View(margin_top: 2) {
                Text(content: "Press 'n' to add a new ticket.", color: theme.text_dimmed)
            }
        }
    }
}
