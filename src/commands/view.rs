//! Ticket tracker command (`ticketdesk view`)

use iocraft::prelude::*;
use tracing::info;

use crate::error::{Result, TicketError};
use crate::ticket::TicketStore;
use crate::tui::TicketTracker;

/// Launch the fullscreen tracker
pub fn cmd_view(store: TicketStore) -> Result<()> {
    info!(tickets = store.len(), "starting tracker");

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| TicketError::Other(format!("Failed to create runtime: {}", e)))?;

    rt.block_on(async {
        element!(TicketTracker(store: Some(store)))
            .fullscreen()
            .await
            .map_err(|e| TicketError::Other(format!("TUI error: {}", e)))
    })
}
