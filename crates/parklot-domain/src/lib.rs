//! Domain models and services for the parking lot

pub mod model;
pub mod service;

pub use model::{ClearedVehicle, ParkingReceipt, VehicleRecord};
pub use service::{LotAllocator, LotStatus, OccupancySnapshot};
