//! ciftify-env: settings resolution and filesystem/command helpers for
//! ciftify neuroimaging pipelines.
//!
//! This is the main entry point for the `ciftify-env` CLI. It parses
//! arguments, captures the environment, dispatches to the command handler,
//! and is the only place that turns an error into a process exit code.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
mod logging;
pub mod process;
pub mod settings;

#[cfg(test)]
mod test_support;

use cli::Cli;
use settings::Environment;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    let env = Environment::from_process();

    match commands::dispatch(cli.command, &env) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
