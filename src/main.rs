//! Deitygen: template-driven deity configuration generator for Eidolon Unchained.
//!
//! This is the main entry point for the `deitygen` CLI. It parses arguments,
//! installs logging, dispatches to the appropriate command handler, and maps
//! errors to exit codes.

mod cli;
mod commands;
pub mod compose;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod generator;
pub mod logging;
pub mod output;
pub mod presets;
pub mod tasks;
pub mod template;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.global.verbose, cli.global.quiet);

    match commands::dispatch(&cli.global, cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
