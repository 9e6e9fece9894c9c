//! Results of removing vehicles from the lot

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::VehicleRecord;

/// Outcome of a billed release
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParkingReceipt {
    pub record: VehicleRecord,
    pub departure: DateTime<Utc>,
    /// Whole hours charged (ceiling of elapsed time, minimum one)
    pub billed_hours: u64,
    pub fee: f64,
}

/// A vehicle removed by an emergency clear. No fee is computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClearedVehicle {
    pub record: VehicleRecord,
    pub fee_waived: bool,
}
