//! Scrollable ticket list component

use iocraft::prelude::*;

use super::ticket_card::TicketCard;
use crate::tui::model::TicketRowModel;
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct TicketListProps {
    pub tickets: Vec<TicketRowModel>,
    pub selected_index: usize,
    /// First visible ticket index
    pub scroll_offset: usize,
    /// Number of cards that fit in the visible area
    pub visible_count: usize,
    pub width: Option<u32>,
}

/// Scrollable list of ticket cards with "more above/below" hints
#[component]
pub fn TicketList(props: &TicketListProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let total = props.tickets.len();
    let start = props.scroll_offset.min(total);
    let end = (start + props.visible_count).min(total);
    let visible: Vec<TicketRowModel> = props.tickets[start..end].to_vec();
    let below = total - end;

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            padding_left: 1,
            padding_right: 1,
        ) {
            #((start > 0).then(|| element! {
                View(height: 1) {
                    Text(content: format!("  {} more above", start), color: theme.text_dimmed)
                }
            }))

            #(visible.into_iter().enumerate().map(|(i, ticket)| {
                let is_selected = start + i == props.selected_index;
                let id = ticket.id;
                element! {
                    TicketCard(
                        key: id,
                        ticket: Some(ticket),
                        is_selected: is_selected,
                        width: props.width,
                    )
                }
            }))

            #((below > 0).then(|| element! {
                View(height: 1) {
                    Text(content: format!("  {} more below", below), color: theme.text_dimmed)
                }
            }))
        }
    }
}
