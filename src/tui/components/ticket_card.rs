//! Ticket card component
//!
//! A fixed-height card showing the title, a status badge in the status
//! palette colors, up to two description lines and the rating.

use iocraft::prelude::*;

use crate::tui::model::TicketRowModel;
use crate::tui::theme::theme;
use crate::utils::{truncate_string, wrap_text_lines};

/// Rows taken by one card, borders included
pub const CARD_HEIGHT: usize = 6;

const DESCRIPTION_LINES: usize = 2;

#[derive(Default, Props)]
pub struct TicketCardProps {
    pub ticket: Option<TicketRowModel>,
    pub is_selected: bool,
    /// Available width for the card content (in characters)
    pub width: Option<u32>,
}

/// Layout:
/// ```text
/// ╭──────────────────────────────────────╮
/// │> Login not working     [ Created ]   │
/// │  Users can't log in with their       │
/// │  credentials                         │
/// │  ★ 4/5                               │
/// ╰──────────────────────────────────────╯
/// ```
#[component]
pub fn TicketCard(props: &TicketCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(ticket) = props.ticket.clone() else {
        return element! { View() }.into_any();
    };

    let border_color = if props.is_selected {
        theme.border_focused
    } else {
        theme.border
    };
    let bg_color = props.is_selected.then_some(theme.highlight);
    let indicator = if props.is_selected { ">" } else { " " };

    // Round border and horizontal padding take 4 columns; leave room for the badge
    let inner_width = props.width.unwrap_or(40).saturating_sub(4) as usize;
    let badge = format!(" {} ", ticket.status_label);
    let title_width = inner_width.saturating_sub(badge.len() + 3).max(8);
    let title = truncate_string(&ticket.title, title_width);

    let description = ticket.description.replace('\n', " ");
    let description_lines =
        wrap_text_lines(&description, inner_width.saturating_sub(2).max(8), DESCRIPTION_LINES);

    let fg: Color = ticket.palette.foreground.into();
    let bg: Color = ticket.palette.background.into();

    element! {
        View(
            width: 100pct,
            height: CARD_HEIGHT as u32,
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
            background_color: bg_color,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(flex_direction: FlexDirection::Row, justify_content: JustifyContent::SpaceBetween) {
                View(flex_direction: FlexDirection::Row) {
                    Text(content: indicator, color: theme.highlight_text, weight: Weight::Bold)
                    Text(content: format!(" {}", title), color: theme.text, weight: Weight::Bold)
                }
                View(background_color: bg) {
                    Text(content: badge, color: fg, weight: Weight::Bold)
                }
            }
            #(description_lines.into_iter().map(|line| element! {
                View(padding_left: 2) {
                    Text(content: line, color: theme.text_dimmed)
                }
            }))
            #(ticket.rating.map(|rating| element! {
                View(padding_left: 2) {
                    Text(content: format!("★ {}", rating), color: theme.rating)
                }
            }))
        }
    }
    .into_any()
}
