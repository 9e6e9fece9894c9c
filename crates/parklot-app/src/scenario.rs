//! Scenario scripts: timed sequences of lot operations
//!
//! Scripts are TOML by default, JSON when the file ends in `.json`.

use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use parklot_types::{Error, Result, ScenarioError, VehicleCategory};
use serde::{Deserialize, Serialize};

/// A scenario script as written on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    /// Overrides the configured capacity
    #[serde(default)]
    pub capacity: Option<usize>,

    /// RFC 3339 start time; event offsets are relative to it
    #[serde(default)]
    pub start: Option<String>,

    #[serde(default)]
    pub events: Vec<ScenarioEvent>,
}

/// One scripted step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ScenarioEvent {
    Admit {
        id: String,
        category: String,
        #[serde(default)]
        owner: String,
        #[serde(default)]
        at_minutes: i64,
    },
    Release {
        id: String,
        #[serde(default)]
        at_minutes: i64,
    },
    Lookup {
        id: String,
    },
    Status,
    Reset,
    Clear,
}

/// A validated step with its absolute timestamp
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Admit {
        id: String,
        category: VehicleCategory,
        owner: String,
        at: DateTime<Utc>,
    },
    Release {
        id: String,
        at: DateTime<Utc>,
    },
    Lookup {
        id: String,
    },
    Status,
    Reset,
    Clear,
}

impl Scenario {
    /// Load a script, picking the parser from the file extension
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("toml") | None => Self::from_toml_str(&content),
            Some(_) => Err(ScenarioError::UnsupportedFormat(path.display().to_string()).into()),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Start time, or `fallback` when the script does not name one
    pub fn start_time(&self, fallback: DateTime<Utc>) -> Result<DateTime<Utc>> {
        match &self.start {
            Some(text) => DateTime::parse_from_rfc3339(text)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|_| ScenarioError::InvalidTimestamp(text.clone()).into()),
            None => Ok(fallback),
        }
    }

    /// Validate every event and resolve offsets against `start`.
    ///
    /// Fails on the first malformed event, before anything is executed.
    pub fn commands(&self, start: DateTime<Utc>) -> Result<Vec<SessionCommand>> {
        self.events
            .iter()
            .map(|event| event.resolve(start))
            .collect()
    }
}

impl ScenarioEvent {
    fn resolve(&self, start: DateTime<Utc>) -> Result<SessionCommand> {
        let command = match self {
            ScenarioEvent::Admit {
                id,
                category,
                owner,
                at_minutes,
            } => SessionCommand::Admit {
                id: id.clone(),
                category: category.parse()?,
                owner: owner.clone(),
                at: offset(start, *at_minutes)?,
            },
            ScenarioEvent::Release { id, at_minutes } => SessionCommand::Release {
                id: id.clone(),
                at: offset(start, *at_minutes)?,
            },
            ScenarioEvent::Lookup { id } => SessionCommand::Lookup { id: id.clone() },
            ScenarioEvent::Status => SessionCommand::Status,
            ScenarioEvent::Reset => SessionCommand::Reset,
            ScenarioEvent::Clear => SessionCommand::Clear,
        };
        Ok(command)
    }
}

fn offset(start: DateTime<Utc>, minutes: i64) -> Result<DateTime<Utc>> {
    Duration::try_minutes(minutes)
        .and_then(|d| start.checked_add_signed(d))
        .ok_or_else(|| ScenarioError::InvalidTimestamp(format!("{} minutes after {}", minutes, start)).into())
}
