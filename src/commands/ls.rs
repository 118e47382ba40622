use crate::display::{format_description, format_ticket_line};
use crate::error::Result;
use crate::ticket::TicketStore;
use crate::types::{Ticket, TicketStatus};

/// Render the collection, optionally filtered by status label
pub fn render_ls(store: &TicketStore, status_filter: Option<&str>, output_json: bool) -> Result<String> {
    let status = status_filter.map(str::parse::<TicketStatus>).transpose()?;

    let tickets: Vec<&Ticket> = match status {
        Some(status) => store.tickets_by_status(status),
        None => store.tickets().iter().collect(),
    };

    if output_json {
        return Ok(serde_json::to_string_pretty(&tickets)?);
    }

    let mut lines = Vec::new();
    for ticket in tickets {
        lines.push(format_ticket_line(ticket));
        if let Some(description) = format_description(ticket) {
            lines.push(description);
        }
    }
    Ok(lines.join("\n"))
}

/// List tickets, optionally filtered by status
pub fn cmd_ls(store: &TicketStore, status_filter: Option<&str>, output_json: bool) -> Result<()> {
    let output = render_ls(store, status_filter, output_json)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TicketError;

    #[test]
    fn test_render_ls_filters_by_status() {
        let store = TicketStore::seeded();
        let output = render_ls(&store, Some("under assistance"), false).unwrap();
        assert!(output.contains("Slow page loading"));
        assert!(output.contains("Slowww and buggy"));
        assert!(!output.contains("Login not working"));
    }

    #[test]
    fn test_render_ls_json() {
        let store = TicketStore::seeded();
        let output = render_ls(&store, Some("Completed"), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let tickets = value.as_array().unwrap();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0]["id"], 3);
        assert_eq!(tickets[0]["status"], "Completed");
        assert_eq!(tickets[0]["rating"], 4);
    }

    #[test]
    fn test_render_ls_unknown_status() {
        let store = TicketStore::seeded();
        assert!(matches!(
            render_ls(&store, Some("Escalated"), false),
            Err(TicketError::InvalidStatus(_))
        ));
    }

    #[test]
    fn test_render_ls_empty_store() {
        assert_eq!(render_ls(&TicketStore::new(), None, false).unwrap(), "");
        assert_eq!(render_ls(&TicketStore::new(), None, true).unwrap(), "[]");
    }
}
