//! # Dictfix Entry Point
//!
//! Thin CLI wrapper around the [`dictfix`] library. With no subcommand the
//! tool runs a recovery pass with the default file pair (`en.json` ->
//! `fixed.json`).
//!
//! All failures are caught here: the error is printed as a single line and
//! the process exits normally. Malformed input lines were already reported
//! during processing and never reach this point.

#![expect(clippy::print_stdout)] // stdout is the user-facing output channel

mod cli;

use clap::Parser as _;

fn main() {
    dictfix::logging::init();

    let cli = cli::Cli::parse();
    let command = cli.command.unwrap_or_default();

    if let Err(err) = cli::run_command(command) {
        // Recovery failures are reported, not propagated: exit code stays 0
        // and no distinction is made between failure kinds.
        println!("{err:#}");
    }
}
