//! Arena CLI - Command-line interface for running creature contests.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Arena - A deterministic two-coach creature battle simulator
#[derive(Parser, Debug)]
#[command(name = "arena")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run an interactive contest between two coaches
    Run {
        /// Roster file for coach 1
        #[arg(required = true)]
        roster1: std::path::PathBuf,

        /// Roster file for coach 2
        #[arg(required = true)]
        roster2: std::path::PathBuf,
    },

    /// Run a contest with automatic champion selection
    Simulate {
        /// Roster file for coach 1
        #[arg(required = true)]
        roster1: std::path::PathBuf,

        /// Roster file for coach 2
        #[arg(required = true)]
        roster2: std::path::PathBuf,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Validate a roster file
    Validate {
        /// Roster file to validate
        #[arg(required = true)]
        roster: std::path::PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Run { roster1, roster2 } => cli::run::execute(&roster1, &roster2),

        Commands::Simulate {
            roster1,
            roster2,
            format,
        } => cli::simulate::execute(&roster1, &roster2, format),

        Commands::Validate { roster } => cli::validate::execute(&roster),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
