//! Convoy pipeline CLI.

use clap::Parser;
use convoy_cli::logging::init_logging;
use std::io::{self, IsTerminal};

mod cli;
mod commands;
mod summary;

use crate::cli::Cli;
use crate::commands::run_convert;
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = cli.log_config(io::stderr().is_terminal());
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run_convert(cli.file.as_deref()) {
        Ok(result) => {
            if cli.summary {
                print_summary(&result.run, &result.outcomes);
            }
            0
        }
        Err(error) => {
            eprintln!("error: {error}");
            1
        }
    };
    std::process::exit(exit_code);
}
