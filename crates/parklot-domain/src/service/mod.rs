//! Domain services

pub mod allocator;
pub mod billing;
pub mod occupancy;
pub mod report;

pub use allocator::LotAllocator;
pub use billing::{billable_hours, elapsed_hours, parking_fee};
pub use occupancy::{LotStatus, OccupancySnapshot};
pub use report::{format_receipt, generate_status_report};
