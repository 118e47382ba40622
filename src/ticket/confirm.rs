//! Two-step confirmation for destructive ticket operations

use tracing::debug;

use super::store::TicketStore;
use crate::types::{Ticket, TicketId};

pub const DELETE_PROMPT_TITLE: &str = "Delete Ticket";
pub const DELETE_PROMPT_MESSAGE: &str = "Are you sure you want to delete this ticket?";

/// Pending delete awaiting the user's answer
///
/// Obtained from [`TicketStore::request_delete`]. Both `confirm` and
/// `dismiss` consume the token, so an answer can only be given once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation {
    ticket_id: TicketId,
    ticket_title: Option<String>,
}

impl DeleteConfirmation {
    pub(crate) fn new(ticket_id: TicketId, ticket_title: Option<String>) -> Self {
        Self {
            ticket_id,
            ticket_title,
        }
    }

    pub fn ticket_id(&self) -> TicketId {
        self.ticket_id
    }

    /// Title of the ticket when the request was made, if it existed then
    pub fn ticket_title(&self) -> Option<&str> {
        self.ticket_title.as_deref()
    }

    pub fn title(&self) -> &'static str {
        DELETE_PROMPT_TITLE
    }

    pub fn message(&self) -> &'static str {
        DELETE_PROMPT_MESSAGE
    }

    /// Perform the delete; a ticket that is already gone is a no-op
    pub fn confirm(self, store: &mut TicketStore) -> Option<Ticket> {
        store.delete(self.ticket_id)
    }

    /// Decline the delete, leaving the store untouched
    pub fn dismiss(self) {
        debug!(id = self.ticket_id, "delete dismissed");
    }
}
