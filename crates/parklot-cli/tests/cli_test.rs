//! Command-line parsing, rendering and config handling

use chrono::{TimeZone, Utc};
use clap::Parser;
use parklot_app::{Config, EventOutcome, ParkingSession};
use parklot_cli::cli::{Cli, Commands};
use parklot_cli::commands::{apply_overrides, execute_with};
use parklot_cli::output::{render_outcome, render_rates, render_status};
use parklot_types::{Error, LotError, OutputFormat, VehicleCategory};
use tempfile::tempdir;

#[test]
fn test_global_overrides_win_over_config() {
    let cli = Cli::try_parse_from(["parklot", "-c", "5", "-f", "json", "demo"]).unwrap();
    assert!(matches!(cli.command, Commands::Demo));

    let mut config = Config::default();
    let output_format = apply_overrides(&mut config, &cli);
    assert_eq!(config.capacity, 5);
    assert_eq!(output_format, OutputFormat::Json);
}

#[test]
fn test_config_values_used_without_flags() {
    let cli = Cli::try_parse_from(["parklot", "rates"]).unwrap();
    let mut config = Config {
        capacity: 3,
        output_format: OutputFormat::Json,
        ..Config::default()
    };
    assert_eq!(apply_overrides(&mut config, &cli), OutputFormat::Json);
    assert_eq!(config.capacity, 3);
}

#[test]
fn test_quick_park_arguments() {
    let cli = Cli::try_parse_from(["parklot", "quick-park", "truck", "-n", "3"]).unwrap();
    match cli.command {
        Commands::QuickPark { category, count } => {
            assert_eq!(category, VehicleCategory::Truck);
            assert_eq!(count, 3);
        }
        _ => panic!("expected quick-park"),
    }
    assert!(Cli::try_parse_from(["parklot", "quick-park", "hovercraft"]).is_err());
}

#[test]
fn test_render_status_json() {
    let t0 = Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap();
    let mut session = ParkingSession::new(2).unwrap();
    session.admit("abc123", VehicleCategory::Car, "John Smith", t0).unwrap();

    let text = render_status(OutputFormat::Json, session.lot(), "$").unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["total_admissions"], 1);
    assert_eq!(json["snapshot"]["occupied_slots"], serde_json::json!([1]));
    assert_eq!(json["snapshot"]["available_slots"], serde_json::json!([2]));
    assert_eq!(json["vehicles"][0]["identifier"], "ABC123");
    assert_eq!(json["vehicles"][0]["category"], "car");
}

#[test]
fn test_render_status_table() {
    let session = ParkingSession::new(2).unwrap();
    let text = render_status(OutputFormat::Table, session.lot(), "$").unwrap();
    assert!(text.contains("Parking Lot Status"));
    assert!(text.contains("Revenue:           $0.00"));
}

#[test]
fn test_render_rates_lists_every_category() {
    let text = render_rates(OutputFormat::Table, "€").unwrap();
    assert!(text.contains("€2.00/h"));
    assert!(text.contains("€3.00/h"));

    let json: serde_json::Value =
        serde_json::from_str(&render_rates(OutputFormat::Json, "$").unwrap()).unwrap();
    assert_eq!(json.as_array().map(Vec::len), Some(VehicleCategory::ALL.len()));
}

#[test]
fn test_render_outcome_lines() {
    let at = Utc.with_ymd_and_hms(2026, 1, 1, 8, 5, 0).unwrap();
    let admitted = EventOutcome::Admitted {
        id: "ABC123".to_string(),
        category: VehicleCategory::Bike,
        slot: 4,
        at,
    };
    assert_eq!(
        render_outcome(1, &admitted, "$"),
        "[  1] Bike ABC123 parked in Slot 4 at 08:05:00\n"
    );

    let failed = EventOutcome::Failed {
        action: "release GHOST".to_string(),
        error: LotError::UnknownIdentifier("GHOST".to_string()).to_string(),
    };
    assert_eq!(
        render_outcome(12, &failed, "$"),
        "[ 12] release GHOST failed: Vehicle with ID GHOST not found\n"
    );
}

#[test]
fn test_config_set_capacity_persists() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("parklot").join("config.json");

    let cli = Cli::try_parse_from(["parklot", "config", "--set-capacity", "7", "--set-currency", "€"]).unwrap();
    execute_with(cli, &path).unwrap();

    let saved = Config::load_from(&path).unwrap();
    assert_eq!(saved.capacity, 7);
    assert_eq!(saved.currency_symbol, "€");
}

#[test]
fn test_config_rejects_zero_capacity() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");

    let cli = Cli::try_parse_from(["parklot", "config", "--set-capacity", "0"]).unwrap();
    assert!(matches!(execute_with(cli, &path).unwrap_err(), Error::Config(_)));
    assert!(!path.exists());
}

#[test]
fn test_config_reset_repairs_invalid_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");

    std::fs::write(&path, r#"{"capacity":0}"#).unwrap();
    let cli = Cli::try_parse_from(["parklot", "config", "--show"]).unwrap();
    assert!(execute_with(cli, &path).is_err());

    let cli = Cli::try_parse_from(["parklot", "config", "--reset"]).unwrap();
    execute_with(cli, &path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());

    std::fs::write(&path, "not json at all").unwrap();
    let cli = Cli::try_parse_from(["parklot", "config", "--reset"]).unwrap();
    execute_with(cli, &path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap().capacity, Config::default().capacity);
}

#[test]
fn test_quick_park_beyond_capacity_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");

    let cli = Cli::try_parse_from(["parklot", "-c", "1", "quick-park", "car", "-n", "2"]).unwrap();
    assert!(matches!(
        execute_with(cli, &path).unwrap_err(),
        Error::Lot(LotError::LotFull { capacity: 1 })
    ));
}

#[test]
fn test_simulate_exports_ledger() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    let script = dir.path().join("day.toml");
    let ledger = dir.path().join("ledger.csv");
    std::fs::write(
        &script,
        r#"
start = "2026-01-01T08:00:00Z"

[[events]]
action = "admit"
id = "A"
category = "suv"

[[events]]
action = "release"
id = "A"
at_minutes = 30
"#,
    )
    .unwrap();

    let cli = Cli::try_parse_from([
        "parklot",
        "simulate",
        script.to_str().unwrap(),
        "-o",
        ledger.to_str().unwrap(),
    ])
    .unwrap();
    execute_with(cli, &config_path).unwrap();

    let csv = std::fs::read_to_string(&ledger).unwrap();
    let rows: Vec<&str> = csv.lines().collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[1].starts_with("A,SUV,Unknown,1,"));
    assert!(rows[1].ends_with(",1,2.5"));
}
