//! Terminal formatting for CLI output

use owo_colors::OwoColorize;

use crate::palette::{StatusPalette, status_palette};
use crate::types::{Ticket, TicketStatus};

/// Status badge such as `[Under Assistance]` in the status palette colors
pub fn format_status_colored(status: TicketStatus) -> String {
    let StatusPalette {
        foreground,
        background,
    } = status_palette(status);
    format!("[{}]", status)
        .truecolor(foreground.r, foreground.g, foreground.b)
        .on_truecolor(background.r, background.g, background.b)
        .to_string()
}

/// Single-line ticket summary with a colored id and status badge
pub fn format_ticket_line(ticket: &Ticket) -> String {
    let id = format!("{:<4}", ticket.id);
    let mut line = format!(
        "{} {} {}",
        id.cyan(),
        format_status_colored(ticket.status),
        ticket.title
    );
    if let Some(rating) = ticket.rating {
        line.push_str(&format!(" {}", format!("({})", rating).dimmed()));
    }
    line
}

/// Indented description line, or `None` for an empty description
pub fn format_description(ticket: &Ticket) -> Option<String> {
    let description = ticket.description.trim();
    if description.is_empty() {
        None
    } else {
        Some(format!("     {}", description.dimmed()))
    }
}

/// One row of the status vocabulary table
pub fn format_status_row(status: TicketStatus) -> String {
    let palette = status_palette(status);
    format!(
        "{:<18} fg {}  bg {}",
        status.label(),
        palette.foreground,
        palette.background
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticket::demo_tickets;

    #[test]
    fn test_format_ticket_line_keeps_text() {
        let tickets = demo_tickets();
        let line = format_ticket_line(&tickets[0]);
        assert!(line.contains("Login not working"));
        assert!(line.contains("[Created]"));
    }

    #[test]
    fn test_format_description() {
        let mut ticket = demo_tickets().remove(0);
        assert!(format_description(&ticket).unwrap().contains("Users can't log in"));
        ticket.description = "  ".to_string();
        assert!(format_description(&ticket).is_none());
    }

    #[test]
    fn test_format_status_row() {
        insta::assert_snapshot!(
            format_status_row(TicketStatus::UnderAssistance),
            @"Under Assistance   fg #FF9500  bg #FFF3E0"
        );
    }
}
