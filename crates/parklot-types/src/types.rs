//! Vehicle category and rate table

use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::ScenarioError;

/// Vehicle category. Categories differ only in label and hourly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Car,
    Bike,
    Truck,
    Suv,
}

impl VehicleCategory {
    /// All categories in display order
    pub const ALL: [VehicleCategory; 4] = [
        VehicleCategory::Car,
        VehicleCategory::Bike,
        VehicleCategory::Truck,
        VehicleCategory::Suv,
    ];

    /// Hourly billing rate in abstract currency units
    pub fn hourly_rate(&self) -> f64 {
        match self {
            VehicleCategory::Car => 2.0,
            VehicleCategory::Bike => 1.0,
            VehicleCategory::Truck => 3.0,
            VehicleCategory::Suv => 2.5,
        }
    }

    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            VehicleCategory::Car => "Car",
            VehicleCategory::Bike => "Bike",
            VehicleCategory::Truck => "Truck",
            VehicleCategory::Suv => "SUV",
        }
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VehicleCategory {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ScenarioError::UnknownCategory(s.to_string()))
    }
}
