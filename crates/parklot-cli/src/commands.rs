//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{render_outcome, render_quick_parked, render_rates, render_report_summary, render_status};
use chrono::Utc;
use log::info;
use parklot_app::export::export_receipts;
use parklot_app::{Config, ParkingSession, Scenario};
use parklot_types::{OutputFormat, Result, VehicleCategory};
use std::path::{Path, PathBuf};

/// Execute CLI command against the user's config file
pub fn execute(cli: Cli) -> Result<()> {
    execute_with(cli, &Config::config_path()?)
}

/// Execute CLI command against a specific config file
pub fn execute_with(cli: Cli, config_path: &Path) -> Result<()> {
    // Reset must work even when the stored config no longer parses
    if let Commands::Config { reset: true, .. } = cli.command {
        return cmd_config_reset(config_path);
    }

    let mut config = Config::load_from(config_path)?;
    let output_format = apply_overrides(&mut config, &cli);

    match cli.command {
        Commands::Demo => cmd_demo(&config, output_format),

        Commands::Simulate { script, export } => cmd_simulate(&config, script, export, output_format),

        Commands::Rates => {
            print!("{}", render_rates(output_format, &config.currency_symbol)?);
            Ok(())
        }

        Commands::QuickPark { category, count } => cmd_quick_park(&config, category, count, output_format),

        Commands::Config {
            show,
            set_capacity,
            set_output,
            set_currency,
            ..
        } => cmd_config(config_path, show, set_capacity, set_output, set_currency),
    }
}

/// Apply `--capacity` to the loaded config and pick the effective output format
pub fn apply_overrides(config: &mut Config, cli: &Cli) -> OutputFormat {
    if let Some(capacity) = cli.capacity {
        config.capacity = capacity;
    }
    cli.format.unwrap_or(config.output_format)
}

fn cmd_demo(config: &Config, output_format: OutputFormat) -> Result<()> {
    let mut session = ParkingSession::new(config.capacity)?;
    let parked = session.seed_demo_fleet(Utc::now());
    info!("Demo fleet parked: {} vehicles", parked.len());

    if output_format == OutputFormat::Table {
        for (id, slot) in &parked {
            println!("Vehicle {} parked in Slot {}", id, slot);
        }
        println!();
    }
    print!("{}", render_status(output_format, session.lot(), &config.currency_symbol)?);
    Ok(())
}

fn cmd_simulate(
    config: &Config,
    script: PathBuf,
    export: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let scenario = Scenario::load(&script)?;
    let report = ParkingSession::replay(&scenario, config.capacity, Utc::now())?;

    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (i, outcome) in report.outcomes.iter().enumerate() {
            print!("{}", render_outcome(i + 1, outcome, &config.currency_symbol));
        }
        print!("{}", render_report_summary(&report, &config.currency_symbol));
    }

    if let Some(path) = export {
        export_receipts(&path, &report.receipts)?;
        eprintln!("Exported {} receipts to {}", report.receipts.len(), path.display());
    }

    Ok(())
}

fn cmd_quick_park(
    config: &Config,
    category: VehicleCategory,
    count: usize,
    output_format: OutputFormat,
) -> Result<()> {
    let mut session = ParkingSession::new(config.capacity)?;
    let now = Utc::now();
    let mut parked = Vec::with_capacity(count);
    for _ in 0..count {
        parked.push(session.quick_park(category, now)?);
    }
    print!("{}", render_quick_parked(output_format, &parked)?);
    Ok(())
}

fn cmd_config_reset(config_path: &Path) -> Result<()> {
    let config = Config::default();
    config.save_to(config_path)?;
    info!("Configuration reset at {}", config_path.display());
    println!("Configuration reset to defaults");
    println!("\n{}", config);
    Ok(())
}

fn cmd_config(
    config_path: &Path,
    show: bool,
    set_capacity: Option<usize>,
    set_output: Option<OutputFormat>,
    set_currency: Option<String>,
) -> Result<()> {
    let mut config = Config::load_from(config_path)?;
    let mut modified = false;

    if let Some(capacity) = set_capacity {
        config.capacity = capacity;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(currency) = set_currency {
        config.currency_symbol = currency;
        modified = true;
    }

    if modified {
        config.save_to(config_path)?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
