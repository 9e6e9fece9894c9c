//! Vehicle identifier and owner name generation

use parklot_types::VehicleCategory;
use rand::seq::SliceRandom;
use rand::Rng;

const FIRST_NAMES: [&str; 8] = [
    "John", "Jane", "Robert", "Emily", "Michael", "Sarah", "David", "Lisa",
];

const LAST_NAMES: [&str; 8] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
];

/// Vehicles parked by the `demo` command
pub const DEMO_FLEET: [(&str, VehicleCategory, &str); 4] = [
    ("ABC123", VehicleCategory::Car, "John Smith"),
    ("XYZ789", VehicleCategory::Bike, "Alice Johnson"),
    ("TRK456", VehicleCategory::Truck, "Bob Wilson"),
    ("SUV321", VehicleCategory::Suv, "Carol Davis"),
];

/// Random plate-style identifier: three letters then three digits (e.g. "QKD204")
pub fn generate_vehicle_id() -> String {
    vehicle_id_from(&mut rand::thread_rng())
}

/// Random "First Last" owner name
pub fn generate_owner_name() -> String {
    owner_name_from(&mut rand::thread_rng())
}

pub fn vehicle_id_from<R: Rng>(rng: &mut R) -> String {
    let letters: String = (0..3).map(|_| char::from(rng.gen_range(b'A'..=b'Z'))).collect();
    let digits: String = (0..3).map(|_| char::from(rng.gen_range(b'0'..=b'9'))).collect();
    letters + &digits
}

pub fn owner_name_from<R: Rng>(rng: &mut R) -> String {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or_default();
    let last = LAST_NAMES.choose(rng).copied().unwrap_or_default();
    format!("{} {}", first, last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_vehicle_id_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let id = vehicle_id_from(&mut rng);
            assert_eq!(id.len(), 6);
            assert!(id[..3].chars().all(|c| c.is_ascii_uppercase()));
            assert!(id[3..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_seeded_ids_repeat() {
        let a = vehicle_id_from(&mut StdRng::seed_from_u64(42));
        let b = vehicle_id_from(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_owner_name_from_lists() {
        let name = generate_owner_name();
        let (first, last) = name.split_once(' ').unwrap();
        assert!(FIRST_NAMES.contains(&first));
        assert!(LAST_NAMES.contains(&last));
    }

    #[test]
    fn test_thread_rng_id_shape() {
        let id = generate_vehicle_id();
        assert_eq!(id.len(), 6);
    }
}
