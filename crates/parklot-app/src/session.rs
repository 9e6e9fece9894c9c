//! Parking session - the use-case layer over the slot allocator
//!
//! A session owns one lot plus the ledger of receipts issued during its
//! lifetime. Callers supply every timestamp; the session never reads the
//! clock itself.

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use parklot_domain::model::normalize_identifier;
use parklot_domain::{ClearedVehicle, LotAllocator, OccupancySnapshot, ParkingReceipt, VehicleRecord};
use parklot_types::{LotError, Result, VehicleCategory};
use serde::Serialize;

use crate::identity::{generate_owner_name, generate_vehicle_id, DEMO_FLEET};
use crate::scenario::{Scenario, SessionCommand};

/// Result of executing one command
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EventOutcome {
    Admitted {
        id: String,
        category: VehicleCategory,
        slot: usize,
        at: DateTime<Utc>,
    },
    Released {
        receipt: ParkingReceipt,
    },
    Found {
        record: VehicleRecord,
    },
    Status {
        snapshot: OccupancySnapshot,
    },
    Reset,
    Cleared {
        vehicles: Vec<ClearedVehicle>,
    },
    Failed {
        action: String,
        error: String,
    },
}

impl EventOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, EventOutcome::Failed { .. })
    }
}

/// A vehicle parked with generated identity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickParked {
    pub id: String,
    pub owner: String,
    pub category: VehicleCategory,
    pub slot: usize,
}

/// Summary of a replayed scenario
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub outcomes: Vec<EventOutcome>,
    pub receipts: Vec<ParkingReceipt>,
    pub final_state: OccupancySnapshot,
    pub total_revenue: f64,
    pub total_admissions: u64,
}

pub struct ParkingSession {
    lot: LotAllocator,
    receipts: Vec<ParkingReceipt>,
}

impl ParkingSession {
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            lot: LotAllocator::new(capacity)?,
            receipts: Vec::new(),
        })
    }

    pub fn lot(&self) -> &LotAllocator {
        &self.lot
    }

    /// Receipts issued so far, in release order
    pub fn receipts(&self) -> &[ParkingReceipt] {
        &self.receipts
    }

    pub fn admit(
        &mut self,
        id: &str,
        category: VehicleCategory,
        owner: &str,
        now: DateTime<Utc>,
    ) -> std::result::Result<usize, LotError> {
        self.lot.admit(id, category, owner, now)
    }

    pub fn release(&mut self, id: &str, now: DateTime<Utc>) -> std::result::Result<ParkingReceipt, LotError> {
        let receipt = self.lot.release(id, now)?;
        self.receipts.push(receipt.clone());
        Ok(receipt)
    }

    /// Park the demo fleet, stopping at the first full-lot rejection
    pub fn seed_demo_fleet(&mut self, now: DateTime<Utc>) -> Vec<(String, usize)> {
        let mut parked = Vec::new();
        for (id, category, owner) in DEMO_FLEET {
            match self.lot.admit(id, category, owner, now) {
                Ok(slot) => parked.push((id.to_string(), slot)),
                Err(LotError::LotFull { .. }) => {
                    debug!("Lot full while seeding demo fleet");
                    break;
                }
                Err(e) => warn!("Skipping demo vehicle {}: {}", id, e),
            }
        }
        parked
    }

    /// Park a vehicle with a generated identifier and owner
    pub fn quick_park(
        &mut self,
        category: VehicleCategory,
        now: DateTime<Utc>,
    ) -> std::result::Result<QuickParked, LotError> {
        let mut id = generate_vehicle_id();
        while self.lot.contains(&id) {
            id = generate_vehicle_id();
        }
        let owner = generate_owner_name();
        let slot = self.lot.admit(&id, category, &owner, now)?;
        Ok(QuickParked {
            id,
            owner,
            category,
            slot,
        })
    }

    /// Execute one command. Lot errors become `Failed` outcomes.
    pub fn execute(&mut self, command: &SessionCommand) -> EventOutcome {
        let outcome = match command {
            SessionCommand::Admit {
                id,
                category,
                owner,
                at,
            } => self
                .admit(id, *category, owner, *at)
                .map(|slot| EventOutcome::Admitted {
                    id: normalize_identifier(id),
                    category: *category,
                    slot,
                    at: *at,
                })
                .unwrap_or_else(|e| failed("admit", e)),
            SessionCommand::Release { id, at } => self
                .release(id, *at)
                .map(|receipt| EventOutcome::Released { receipt })
                .unwrap_or_else(|e| failed("release", e)),
            SessionCommand::Lookup { id } => self
                .lot
                .lookup(id)
                .map(|record| EventOutcome::Found {
                    record: record.clone(),
                })
                .unwrap_or_else(|e| failed("lookup", e)),
            SessionCommand::Status => EventOutcome::Status {
                snapshot: self.lot.query_state(),
            },
            SessionCommand::Reset => {
                self.lot.reset();
                EventOutcome::Reset
            }
            SessionCommand::Clear => EventOutcome::Cleared {
                vehicles: self.lot.clear_all(),
            },
        };
        if let EventOutcome::Failed { action, error } = &outcome {
            warn!("{} failed: {}", action, error);
        }
        outcome
    }

    /// Replay a whole scenario against a fresh lot.
    ///
    /// `capacity` and `fallback_start` apply when the script does not set
    /// them. Malformed scripts fail before any command runs.
    pub fn replay(scenario: &Scenario, capacity: usize, fallback_start: DateTime<Utc>) -> Result<SessionReport> {
        let start = scenario.start_time(fallback_start)?;
        let commands = scenario.commands(start)?;
        let mut session = ParkingSession::new(scenario.capacity.unwrap_or(capacity))?;
        info!(
            "Replaying {} events on a {}-slot lot from {}",
            commands.len(),
            session.lot.capacity(),
            start
        );

        let outcomes = commands.iter().map(|c| session.execute(c)).collect();
        Ok(session.into_report(outcomes))
    }

    fn into_report(self, outcomes: Vec<EventOutcome>) -> SessionReport {
        SessionReport {
            outcomes,
            final_state: self.lot.query_state(),
            total_revenue: self.lot.total_revenue(),
            total_admissions: self.lot.total_admissions(),
            receipts: self.receipts,
        }
    }
}

fn failed(action: &str, error: LotError) -> EventOutcome {
    EventOutcome::Failed {
        action: action.to_string(),
        error: error.to_string(),
    }
}
