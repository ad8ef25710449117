mod cli;
mod platform;

use std::process::ExitCode;

use buddy_logging::buddy_error;
use clap::Parser;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    if let Some(destination) = cli.log_destination() {
        platform::logging::initialize(destination, cli.log_level());
    }

    match platform::run_app(cli) {
        Ok(code) => code,
        Err(err) => {
            buddy_error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
