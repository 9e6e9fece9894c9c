//! Error types for parklot

use thiserror::Error;

/// Errors raised by the slot allocator.
///
/// Every allocator operation is all-or-nothing: when one of these is
/// returned the lot is exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LotError {
    #[error("Parking lot is full ({capacity} slots occupied)")]
    LotFull { capacity: usize },

    #[error("Vehicle {0} is already parked")]
    DuplicateIdentifier(String),

    #[error("Vehicle with ID {0} not found")]
    UnknownIdentifier(String),

    #[error("Invalid capacity {0}: a lot needs at least one slot")]
    InvalidCapacity(usize),

    #[error("Vehicle ID must not be empty")]
    InvalidIdentifier,
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Scenario script errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    #[error("Unknown vehicle category: {0}")]
    UnknownCategory(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Unsupported scenario format: {0}")]
    UnsupportedFormat(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Parking lot error: {0}")]
    Lot(#[from] LotError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
