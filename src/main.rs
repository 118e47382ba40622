use clap::Parser;
use std::process::ExitCode;

use ticketdesk::cli::{Cli, Commands, ConfigAction};
use ticketdesk::commands::{
    cmd_config_path, cmd_config_show, cmd_ls, cmd_statuses, cmd_view, starting_store,
};
use ticketdesk::config::Config;
use ticketdesk::error::Result;
use ticketdesk::logging::init_logging;

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    init_logging(&config.log)?;

    match cli.command.unwrap_or(Commands::View { empty: false }) {
        Commands::View { empty } => cmd_view(starting_store(&config, empty)),
        Commands::Ls {
            status,
            json,
            empty,
        } => cmd_ls(&starting_store(&config, empty), status.as_deref(), json),
        Commands::Statuses { json } => cmd_statuses(json),
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd_config_show(&config),
            ConfigAction::Path => cmd_config_path(),
        },
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
