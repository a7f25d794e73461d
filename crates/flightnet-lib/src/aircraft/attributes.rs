//! Aircraft performance and operating-cost attributes.
//!
//! This module contains the core aircraft data structures that describe an
//! aircraft's range, tank, speed and hourly/distance-based cost rates.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Direct operating cost rates for an aircraft type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftCostProfile {
    /// Fuel burned per kilometre flown (kg/km).
    pub fuel_burn_kg_per_km: f64,
    pub maintenance_per_hour: f64,
    pub depreciation_per_hour: f64,
    pub insurance_per_hour: f64,
    /// En-route navigation charges per kilometre.
    pub navigation_fee_per_km: f64,
    /// Flat ground handling charge per stop.
    pub ground_handling_per_stop: f64,
}

impl AircraftCostProfile {
    /// Validate the cost rates. Burn must be strictly positive; every other
    /// rate must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if !self.fuel_burn_kg_per_km.is_finite() || self.fuel_burn_kg_per_km <= 0.0 {
            return Err(Error::InvalidAircraft {
                message: "fuel_burn_kg_per_km must be a finite positive number".to_string(),
            });
        }

        let rates = [
            (self.maintenance_per_hour, "maintenance_per_hour"),
            (self.depreciation_per_hour, "depreciation_per_hour"),
            (self.insurance_per_hour, "insurance_per_hour"),
            (self.navigation_fee_per_km, "navigation_fee_per_km"),
            (self.ground_handling_per_stop, "ground_handling_per_stop"),
        ];

        for (value, field) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidAircraft {
                    message: format!("{field} must be a finite non-negative number"),
                });
            }
        }

        Ok(())
    }
}

/// Aircraft type used for one optimization session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    pub name: String,
    pub category: String,
    pub max_range_km: f64,
    pub max_fuel_capacity_kg: f64,
    pub cruise_speed_kmh: f64,
    pub costs: AircraftCostProfile,
}

impl Aircraft {
    /// Validate aircraft attributes for correctness.
    ///
    /// Zero or negative range, tank capacity or cruise speed would produce
    /// division by zero or negative costs further down the pipeline.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidAircraft {
                message: "aircraft name must not be empty".to_string(),
            });
        }

        let fields = [
            (self.max_range_km, "max_range_km"),
            (self.max_fuel_capacity_kg, "max_fuel_capacity_kg"),
            (self.cruise_speed_kmh, "cruise_speed_kmh"),
        ];

        for (value, field) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidAircraft {
                    message: format!("{field} must be a finite positive number"),
                });
            }
        }

        self.costs.validate()
    }

    /// Fuel required to fly `distance_km`.
    pub fn fuel_required_kg(&self, distance_km: f64) -> f64 {
        distance_km * self.costs.fuel_burn_kg_per_km
    }

    /// Airborne time for `distance_km` at cruise speed, excluding ground operations.
    pub fn flight_time_hours(&self, distance_km: f64) -> f64 {
        distance_km / self.cruise_speed_kmh
    }

    /// Boeing 777-300ER equivalent used by the bundled catalog.
    pub fn widebody_long_range() -> Self {
        Self {
            name: "777-300ER".to_string(),
            category: "Widebody Long Range".to_string(),
            max_range_km: 13_000.0,
            max_fuel_capacity_kg: 45_000.0,
            cruise_speed_kmh: 900.0,
            costs: AircraftCostProfile {
                fuel_burn_kg_per_km: 3.2,
                maintenance_per_hour: 850.0,
                depreciation_per_hour: 1200.0,
                insurance_per_hour: 180.0,
                navigation_fee_per_km: 0.12,
                ground_handling_per_stop: 450.0,
            },
        }
    }
}
