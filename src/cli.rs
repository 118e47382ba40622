use clap::{Parser, Subcommand};

use crate::types::TicketStatus;

#[derive(Parser)]
#[command(name = "ticketdesk")]
#[command(about = "Support ticket tracker for the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the fullscreen ticket tracker (default)
    #[command(visible_alias = "v")]
    View {
        /// Start without the demo tickets
        #[arg(long)]
        empty: bool,
    },

    /// List the starting tickets
    Ls {
        /// Only show tickets with this status
        #[arg(long, value_parser = parse_status)]
        status: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Start without the demo tickets
        #[arg(long)]
        empty: bool,
    },

    /// Show the status vocabulary and its colors
    Statuses {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
}

fn parse_status(s: &str) -> Result<String, String> {
    s.parse::<TicketStatus>()
        .map(|status| status.label().to_string())
        .map_err(|e| format!("{e}. Must be one of: {}", crate::types::VALID_STATUSES.join(", ")))
}
