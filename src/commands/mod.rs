//! CLI subcommand implementations

mod config;
mod ls;
mod statuses;
mod view;

pub use config::{cmd_config_path, cmd_config_show};
pub use ls::{cmd_ls, render_ls};
pub use statuses::{cmd_statuses, render_statuses};
pub use view::cmd_view;

use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::ticket::TicketStore;

/// The collection a session starts from
///
/// Seeded with the demo tickets unless `empty` is set or the config turns
/// seeding off.
pub fn starting_store(config: &Config, empty: bool) -> TicketStore {
    if empty || !config.seed_demo_tickets {
        TicketStore::new()
    } else {
        TicketStore::seeded()
    }
}

/// Print a value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
