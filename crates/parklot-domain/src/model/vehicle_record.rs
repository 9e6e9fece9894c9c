//! Parked vehicle record

use chrono::{DateTime, Utc};
use parklot_types::VehicleCategory;
use serde::Serialize;

/// Owner name used when none is given at admission
pub const UNKNOWN_OWNER: &str = "Unknown";

/// One vehicle currently parked in the lot.
///
/// Records are only created by [`crate::LotAllocator::admit`], which sets
/// the arrival time and slot exactly once. There are no setters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleRecord {
    identifier: String,
    category: VehicleCategory,
    owner: String,
    arrival: DateTime<Utc>,
    slot: usize,
}

impl VehicleRecord {
    pub(crate) fn new(
        identifier: String,
        category: VehicleCategory,
        owner: &str,
        arrival: DateTime<Utc>,
        slot: usize,
    ) -> Self {
        Self {
            identifier,
            category,
            owner: normalize_owner(owner),
            arrival,
            slot,
        }
    }

    /// Normalized (upper-cased) vehicle identifier
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn category(&self) -> VehicleCategory {
        self.category
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Admission timestamp
    pub fn arrival(&self) -> DateTime<Utc> {
        self.arrival
    }

    /// 1-based slot number
    pub fn slot(&self) -> usize {
        self.slot
    }
}

/// Trim and upper-case a vehicle identifier
pub fn normalize_identifier(identifier: &str) -> String {
    identifier.trim().to_uppercase()
}

/// Trim an owner name, falling back to [`UNKNOWN_OWNER`]
pub fn normalize_owner(owner: &str) -> String {
    let owner = owner.trim();
    if owner.is_empty() {
        UNKNOWN_OWNER.to_string()
    } else {
        owner.to_string()
    }
}
