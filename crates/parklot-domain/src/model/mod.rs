//! Domain model types

pub mod receipt;
pub mod vehicle_record;

pub use receipt::{ClearedVehicle, ParkingReceipt};
pub use vehicle_record::{normalize_identifier, normalize_owner, VehicleRecord, UNKNOWN_OWNER};
