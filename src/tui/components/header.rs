//! App header bar component

use iocraft::prelude::*;

use crate::ticket::StatusCounts;
use crate::tui::theme::theme;
use crate::types::TicketStatus;

#[derive(Default, Props)]
pub struct HeaderProps<'a> {
    /// Title (defaults to "Ticket Tracker")
    pub title: Option<&'a str>,
    pub ticket_count: Option<usize>,
    /// Per-status breakdown shown next to the count
    pub counts: Option<StatusCounts>,
}

/// App header bar showing title and ticket count
#[component]
pub fn Header<'a>(props: &HeaderProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();
    let title = props.title.unwrap_or("Ticket Tracker").to_string();
    let count_label = props.ticket_count.map(|count| match &props.counts {
        Some(counts) if count > 0 => {
            format!("{}  {}", status_summary(counts), ticket_count_label(count))
        }
        _ => ticket_count_label(count),
    });

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.header,
        ) {
            Text(
                content: title,
                color: theme.text,
                weight: Weight::Bold,
            )
            #(count_label.map(|content| element! {
                Text(content, color: theme.text)
            }))
        }
    }
}

fn ticket_count_label(count: usize) -> String {
    if count == 1 {
        "1 ticket".to_string()
    } else {
        format!("{} tickets", count)
    }
}

/// e.g. `1 Created · 2 Under Assistance · 1 Completed`
fn status_summary(counts: &StatusCounts) -> String {
    TicketStatus::ALL
        .iter()
        .map(|&status| format!("{} {}", counts.get(status), status.label()))
        .collect::<Vec<_>>()
        .join(" · ")
}
