//! Application service layer - config, sessions, scenarios, export

pub mod config;
pub mod export;
pub mod identity;
pub mod scenario;
pub mod session;

pub use config::Config;
pub use scenario::{Scenario, ScenarioEvent, SessionCommand};
pub use session::{EventOutcome, ParkingSession, QuickParked, SessionReport};
