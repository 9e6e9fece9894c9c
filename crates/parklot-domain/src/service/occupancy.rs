//! Occupancy snapshot and lot status

use serde::Serialize;

/// Point-in-time view of slot usage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccupancySnapshot {
    pub capacity: usize,
    /// Free slot numbers, ascending
    pub available_slots: Vec<usize>,
    /// Occupied slot numbers, ascending
    pub occupied_slots: Vec<usize>,
    /// Occupied share of capacity, 0-100
    pub occupancy_rate: f64,
    pub is_full: bool,
    pub is_empty: bool,
}

impl OccupancySnapshot {
    pub fn status(&self) -> LotStatus {
        LotStatus::from_counts(self.occupied_slots.len(), self.capacity)
    }
}

/// Headline status shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LotStatus {
    Full,
    Empty,
    Partial { occupied: usize, capacity: usize },
}

impl LotStatus {
    pub fn from_counts(occupied: usize, capacity: usize) -> Self {
        if occupied >= capacity {
            LotStatus::Full
        } else if occupied == 0 {
            LotStatus::Empty
        } else {
            LotStatus::Partial { occupied, capacity }
        }
    }
}

impl std::fmt::Display for LotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LotStatus::Full => write!(f, "FULL"),
            LotStatus::Empty => write!(f, "EMPTY"),
            LotStatus::Partial { occupied, capacity } => write!(f, "{}/{}", occupied, capacity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(LotStatus::from_counts(0, 12).to_string(), "EMPTY");
        assert_eq!(LotStatus::from_counts(12, 12).to_string(), "FULL");
        assert_eq!(LotStatus::from_counts(4, 12).to_string(), "4/12");
    }
}
