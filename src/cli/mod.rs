pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;
use log::error;
use std::process::ExitCode;

/// Run the command-line interface
pub fn run() -> ExitCode {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug, cli.quiet);

    match commands::handle_process_command(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
