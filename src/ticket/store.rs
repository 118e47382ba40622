//! In-memory ticket collection and its mutators

use tracing::debug;

use super::confirm::DeleteConfirmation;
use super::seed::demo_tickets;
use super::validate::validate_title;
use crate::error::{Result, TicketError};
use crate::types::{Draft, Ticket, TicketId, TicketStatus};

/// Informational reply to an edit request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditAcknowledgement {
    pub ticket_id: TicketId,
    pub message: String,
}

/// Counts of tickets by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub created: usize,
    pub under_assistance: usize,
    pub completed: usize,
}

impl StatusCounts {
    pub fn get(&self, status: TicketStatus) -> usize {
        match status {
            TicketStatus::Created => self.created,
            TicketStatus::UnderAssistance => self.under_assistance,
            TicketStatus::Completed => self.completed,
        }
    }
}

/// Ordered collection of committed tickets
///
/// Tickets keep insertion order. Ids come from a high-water mark that starts
/// at `len + 1` and only moves forward, so an id freed by `delete` is never
/// handed out again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
    next_id: TicketId,
}

impl Default for TicketStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            tickets: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store holding the four demo tickets
    pub fn seeded() -> Self {
        let tickets = demo_tickets();
        let next_id = tickets.len() as TicketId + 1;
        Self { tickets, next_id }
    }

    /// Ordered read-only snapshot of the collection
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn get(&self, id: TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Commit a draft as a new ticket at the end of the collection
    ///
    /// Fails with `EmptyTitle` when the title is blank, or `IdsExhausted` once
    /// the id counter cannot advance; the collection is left untouched in
    /// both cases. Duplicate titles are allowed.
    pub fn add(&mut self, draft: &Draft) -> Result<Ticket> {
        validate_title(&draft.title)?;
        let following = self
            .next_id
            .checked_add(1)
            .ok_or(TicketError::IdsExhausted)?;

        let ticket = Ticket {
            id: self.next_id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status,
            rating: None,
        };
        self.next_id = following;
        self.tickets.push(ticket.clone());

        debug!(id = ticket.id, status = %ticket.status, "ticket added");
        Ok(ticket)
    }

    /// Remove the ticket with the given id
    ///
    /// Returns the removed ticket. An unknown id is a silent no-op and
    /// returns `None`; it is never reported as an error.
    pub fn delete(&mut self, id: TicketId) -> Option<Ticket> {
        let index = self.tickets.iter().position(|t| t.id == id)?;
        let removed = self.tickets.remove(index);
        debug!(id, "ticket deleted");
        Some(removed)
    }

    /// Start the two-step delete protocol for `id`
    pub fn request_delete(&self, id: TicketId) -> DeleteConfirmation {
        DeleteConfirmation::new(id, self.get(id).map(|t| t.title.clone()))
    }

    /// Acknowledge an edit request without changing anything
    pub fn edit(&self, ticket: &Ticket) -> EditAcknowledgement {
        EditAcknowledgement {
            ticket_id: ticket.id,
            message: format!("Would edit ticket: {}", ticket.title),
        }
    }

    /// Replace title, description and status of an existing ticket
    ///
    /// The id, rating and position of the ticket are preserved.
    pub fn update(&mut self, id: TicketId, draft: &Draft) -> Result<Ticket> {
        validate_title(&draft.title)?;

        let ticket = self
            .tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TicketError::TicketNotFound(id))?;
        ticket.title = draft.title.clone();
        ticket.description = draft.description.clone();
        ticket.status = draft.status;

        debug!(id, status = %ticket.status, "ticket updated");
        Ok(ticket.clone())
    }

    /// Tickets with the given status, in collection order
    pub fn tickets_by_status(&self, status: TicketStatus) -> Vec<&Ticket> {
        self.tickets.iter().filter(|t| t.status == status).collect()
    }

    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for ticket in &self.tickets {
            match ticket.status {
                TicketStatus::Created => counts.created += 1,
                TicketStatus::UnderAssistance => counts.under_assistance += 1,
                TicketStatus::Completed => counts.completed += 1,
            }
        }
        counts
    }
}
