pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod logging;
pub mod palette;
pub mod ticket;
pub mod tui;
pub mod types;
pub mod utils;

pub use config::Config;
pub use error::{Result, TicketError};
pub use form::{FormField, FormVisibility, TicketFormState};
pub use palette::{Rgb, StatusPalette, palette_for_label, status_palette};
pub use ticket::{DeleteConfirmation, EditAcknowledgement, TicketStore, demo_tickets};
pub use types::{Draft, Rating, Ticket, TicketId, TicketStatus};
