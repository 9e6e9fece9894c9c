//! CLI definition using clap

use clap::{Parser, Subcommand};
use parklot_types::{OutputFormat, VehicleCategory};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "parklot")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Parking lot slot allocation and billing")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Number of slots. Uses config value if not specified.
    #[arg(long, short = 'c', global = true)]
    pub capacity: Option<usize>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Park the demo fleet and show the lot
    Demo,

    /// Replay a scenario script (TOML or JSON)
    Simulate {
        /// Path to scenario script
        script: PathBuf,

        /// Write issued receipts to a CSV file
        #[arg(long, short = 'o')]
        export: Option<PathBuf>,
    },

    /// Show hourly rates per vehicle category
    Rates,

    /// Park vehicles with generated IDs and owners
    QuickPark {
        /// Vehicle category
        category: VehicleCategory,

        /// Number of vehicles to park
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default capacity
        #[arg(long)]
        set_capacity: Option<usize>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set currency symbol
        #[arg(long)]
        set_currency: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
