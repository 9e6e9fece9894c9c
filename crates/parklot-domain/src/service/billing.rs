//! Parking fee calculation

use chrono::{DateTime, Duration, Utc};
use parklot_types::VehicleCategory;

const NANOS_PER_HOUR: f64 = 3_600_000_000_000.0;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Elapsed time between arrival and departure in fractional hours.
/// Negative when departure precedes arrival.
pub fn elapsed_hours(arrival: DateTime<Utc>, departure: DateTime<Utc>) -> f64 {
    let stay = departure - arrival;
    match stay.num_nanoseconds() {
        Some(nanos) => nanos as f64 / NANOS_PER_HOUR,
        None => stay.num_milliseconds() as f64 / MILLIS_PER_HOUR,
    }
}

/// Hours to charge: ceiling of the elapsed time with a one-hour floor.
///
/// Works on the exact `Duration`, so any remainder past a whole hour,
/// however small, starts another hour.
pub fn billable_hours(arrival: DateTime<Utc>, departure: DateTime<Utc>) -> u64 {
    let stay = departure - arrival;
    if stay <= Duration::hours(1) {
        return 1;
    }
    let whole = stay.num_hours();
    let billed = if stay > Duration::hours(whole) { whole + 1 } else { whole };
    billed as u64
}

/// Fee for a stay of the given category
pub fn parking_fee(category: VehicleCategory, billed_hours: u64) -> f64 {
    billed_hours as f64 * category.hourly_rate()
}
