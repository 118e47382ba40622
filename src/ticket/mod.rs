//! Committed tickets: the store, its validation rules, and the delete protocol

mod confirm;
mod seed;
mod store;
mod validate;

pub use confirm::{DELETE_PROMPT_MESSAGE, DELETE_PROMPT_TITLE, DeleteConfirmation};
pub use seed::demo_tickets;
pub use store::{EditAcknowledgement, StatusCounts, TicketStore};
pub use validate::validate_title;
