//! Aircraft data types, crew costs, fuel planning and catalog management.
//!
//! This module is organized into focused submodules:
//!
//! - [`attributes`] - Aircraft performance and operating-cost rates
//! - [`crew`] - Crew cost profiles and regional wage tiers
//! - [`fuel`] - Fuel purchase planning and tank simulation
//! - [`catalog`] - Aircraft catalog loading and management
//! - [`constants`] - Shared constants used across calculations
//!
//! # Example
//!
//! ```no_run
//! use flightnet_lib::aircraft::{AircraftCatalog, CrewRegion};
//!
//! let catalog = AircraftCatalog::builtin().unwrap();
//! let aircraft = catalog.get("777-300ER").unwrap();
//! let crew = CrewRegion::India.profile();
//!
//! // Fuel for a 5,000 km leg and the crew bill for its block time.
//! let fuel = aircraft.fuel_required_kg(5_000.0);
//! let crew_cost = (aircraft.flight_time_hours(5_000.0) + 0.5) * crew.total_per_hour();
//! ```

pub mod attributes;
pub mod catalog;
pub mod constants;
pub mod crew;
pub mod fuel;

pub use attributes::{Aircraft, AircraftCostProfile};
pub use catalog::AircraftCatalog;
pub use constants::{DEFAULT_SAFETY_FACTOR, GROUND_OPERATIONS_HOURS};
pub use crew::{CrewCostProfile, CrewRegion};
pub use fuel::{
    legs_for_path, plan_fuel_for_legs, plan_fuel_purchases, simulate_tank, FuelPlan,
    FuelPurchase, Leg, TankLevel,
};
