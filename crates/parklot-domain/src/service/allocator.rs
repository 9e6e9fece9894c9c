//! First-fit slot allocator with billing

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use log::{debug, info};
use parklot_types::{LotError, VehicleCategory};

use super::billing::{billable_hours, parking_fee};
use super::occupancy::{LotStatus, OccupancySnapshot};
use crate::model::{normalize_identifier, ClearedVehicle, ParkingReceipt, VehicleRecord};

/// Fixed-capacity parking lot.
///
/// Owns the slot table and an index from identifier to slot position.
/// `admit`, `release`, `reset` and `clear_all` are the only mutators and
/// keep both structures in sync.
#[derive(Debug, Clone)]
pub struct LotAllocator {
    slots: Vec<Option<VehicleRecord>>,
    index: HashMap<String, usize>,
    total_revenue: f64,
    total_admissions: u64,
}

impl LotAllocator {
    /// Create an empty lot with `capacity` slots
    pub fn new(capacity: usize) -> Result<Self, LotError> {
        if capacity < 1 {
            return Err(LotError::InvalidCapacity(capacity));
        }
        Ok(Self {
            slots: (0..capacity).map(|_| None).collect(),
            index: HashMap::with_capacity(capacity),
            total_revenue: 0.0,
            total_admissions: 0,
        })
    }

    /// Park a vehicle in the lowest-numbered free slot.
    ///
    /// Returns the 1-based slot number.
    pub fn admit(
        &mut self,
        identifier: &str,
        category: VehicleCategory,
        owner: &str,
        now: DateTime<Utc>,
    ) -> Result<usize, LotError> {
        let identifier = normalize_identifier(identifier);
        if identifier.is_empty() {
            return Err(LotError::InvalidIdentifier);
        }
        if self.index.contains_key(&identifier) {
            return Err(LotError::DuplicateIdentifier(identifier));
        }
        let cell = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(LotError::LotFull {
                capacity: self.capacity(),
            })?;

        let slot = cell + 1;
        debug!("Admitting {} ({}) into slot {}", identifier, category, slot);
        self.slots[cell] = Some(VehicleRecord::new(identifier.clone(), category, owner, now, slot));
        self.index.insert(identifier, cell);
        self.total_admissions += 1;
        Ok(slot)
    }

    /// Remove a vehicle and charge it for its stay.
    pub fn release(&mut self, identifier: &str, now: DateTime<Utc>) -> Result<ParkingReceipt, LotError> {
        let identifier = normalize_identifier(identifier);
        let cell = self
            .index
            .remove(&identifier)
            .ok_or_else(|| LotError::UnknownIdentifier(identifier.clone()))?;
        let record = self
            .slots
            .get_mut(cell)
            .and_then(Option::take)
            .ok_or_else(|| LotError::UnknownIdentifier(identifier.clone()))?;

        let billed_hours = billable_hours(record.arrival(), now);
        let fee = parking_fee(record.category(), billed_hours);
        self.total_revenue += fee;
        debug!(
            "Released {} from slot {}: {} h, fee {:.2}",
            identifier,
            record.slot(),
            billed_hours,
            fee
        );

        Ok(ParkingReceipt {
            record,
            departure: now,
            billed_hours,
            fee,
        })
    }

    /// Occupancy snapshot
    pub fn query_state(&self) -> OccupancySnapshot {
        let (occupied_slots, available_slots): (Vec<usize>, Vec<usize>) =
            (1..=self.capacity()).partition(|&slot| self.slots[slot - 1].is_some());
        let occupancy_rate = occupied_slots.len() as f64 / self.capacity() as f64 * 100.0;
        OccupancySnapshot {
            capacity: self.capacity(),
            is_full: available_slots.is_empty(),
            is_empty: occupied_slots.is_empty(),
            available_slots,
            occupied_slots,
            occupancy_rate,
        }
    }

    /// Empty every slot. Revenue and admission counters are kept.
    pub fn reset(&mut self) {
        info!("Resetting lot ({} vehicles dropped)", self.index.len());
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.index.clear();
    }

    /// Remove every parked vehicle without charging, in slot order.
    pub fn clear_all(&mut self) -> Vec<ClearedVehicle> {
        let cleared: Vec<ClearedVehicle> = self
            .slots
            .iter_mut()
            .filter_map(Option::take)
            .map(|record| ClearedVehicle {
                record,
                fee_waived: true,
            })
            .collect();
        self.index.clear();
        info!("Emergency clear removed {} vehicles", cleared.len());
        cleared
    }

    /// Find a parked vehicle by identifier
    pub fn lookup(&self, identifier: &str) -> Result<&VehicleRecord, LotError> {
        let identifier = normalize_identifier(identifier);
        self.index
            .get(&identifier)
            .and_then(|&cell| self.slots[cell].as_ref())
            .ok_or(LotError::UnknownIdentifier(identifier))
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.index.contains_key(&normalize_identifier(identifier))
    }

    /// Vehicle in a 1-based slot, `None` when empty or out of range
    pub fn slot_status(&self, slot: usize) -> Option<&VehicleRecord> {
        slot.checked_sub(1)
            .and_then(|cell| self.slots.get(cell))
            .and_then(Option::as_ref)
    }

    /// Parked vehicles in slot order
    pub fn vehicles(&self) -> impl Iterator<Item = &VehicleRecord> {
        self.slots.iter().flatten()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn parked_count(&self) -> usize {
        self.index.len()
    }

    pub fn is_full(&self) -> bool {
        self.parked_count() == self.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn status(&self) -> LotStatus {
        LotStatus::from_counts(self.parked_count(), self.capacity())
    }

    pub fn total_revenue(&self) -> f64 {
        self.total_revenue
    }

    pub fn total_admissions(&self) -> u64 {
        self.total_admissions
    }

    /// Check that the slot table and the index agree
    pub fn is_consistent(&self) -> bool {
        let occupied = self.slots.iter().filter(|s| s.is_some()).count();
        occupied == self.index.len()
            && self.index.iter().all(|(identifier, &cell)| {
                self.slots
                    .get(cell)
                    .and_then(Option::as_ref)
                    .map(|r| r.identifier() == identifier && r.slot() == cell + 1)
                    .unwrap_or(false)
            })
    }
}
