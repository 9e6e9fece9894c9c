//! Parklot - parking lot slot allocation and billing
//!
//! A CLI that drives the parking lot model with demo data and scripted sessions.

use clap::Parser;
use parklot_cli::cli::Cli;
use parklot_cli::commands;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
