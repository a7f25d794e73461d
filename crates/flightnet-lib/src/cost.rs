//! Itemized cost and time of individual legs.
//!
//! Every component is a product of validated non-negative inputs, so a
//! segment never reduces the cost or time of the path it extends.

use serde::Serialize;

use crate::aircraft::{FuelPlan, GROUND_OPERATIONS_HOURS};
use crate::network::Network;

/// One directed leg with its full cost breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightSegment {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    /// Airborne time plus fixed ground operations.
    pub block_time_hours: f64,
    pub fuel_needed_kg: f64,
    /// Cash paid for fuel bought at `from`; zero unless `from` is a refuel point.
    pub fuel_cost: f64,
    pub landing_fee: f64,
    pub crew_cost: f64,
    pub maintenance_cost: f64,
    pub depreciation_cost: f64,
    pub insurance_cost: f64,
    pub navigation_fees: f64,
    pub ground_handling_cost: f64,
    pub requires_refuel: bool,
    pub total_cost: f64,
}

/// Price a single leg under the fuel plan computed for the path containing it.
///
/// Fuel cost is what is paid at the departure airport, which may cover more
/// than this leg's own consumption. Crew are billed at the network's
/// origin-fixed hourly rate.
pub fn calculate_segment(
    network: &Network,
    from: &str,
    to: &str,
    plan: &FuelPlan,
) -> FlightSegment {
    let aircraft = network.aircraft();
    let rates = &aircraft.costs;

    let distance_km = network.distance(from, to);
    let block_time_hours = aircraft.flight_time_hours(distance_km) + GROUND_OPERATIONS_HOURS;
    let fuel_needed_kg = aircraft.fuel_required_kg(distance_km);

    let purchased = plan.purchase_at(from);
    let fuel_cost = match (purchased, network.airport(from)) {
        (Some(kg), Some(origin)) => kg * origin.fuel_price_per_kg,
        _ => 0.0,
    };
    let landing_fee = network.airport(to).map(|a| a.landing_fee).unwrap_or(0.0);

    let crew_cost = block_time_hours * network.crew().total_per_hour();
    let maintenance_cost = block_time_hours * rates.maintenance_per_hour;
    let depreciation_cost = block_time_hours * rates.depreciation_per_hour;
    let insurance_cost = block_time_hours * rates.insurance_per_hour;
    let navigation_fees = distance_km * rates.navigation_fee_per_km;
    let ground_handling_cost = rates.ground_handling_per_stop;

    let total_cost = fuel_cost
        + landing_fee
        + crew_cost
        + maintenance_cost
        + depreciation_cost
        + insurance_cost
        + navigation_fees
        + ground_handling_cost;

    FlightSegment {
        from: from.to_string(),
        to: to.to_string(),
        distance_km,
        block_time_hours,
        fuel_needed_kg,
        fuel_cost,
        landing_fee,
        crew_cost,
        maintenance_cost,
        depreciation_cost,
        insurance_cost,
        navigation_fees,
        ground_handling_cost,
        requires_refuel: purchased.is_some(),
        total_cost,
    }
}

/// Sums over the segments of a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PathTotals {
    pub distance_km: f64,
    pub block_time_hours: f64,
    pub fuel_cost: f64,
    pub landing_fees: f64,
    pub crew_cost: f64,
    pub maintenance_cost: f64,
    pub depreciation_cost: f64,
    pub insurance_cost: f64,
    pub navigation_fees: f64,
    pub ground_handling_cost: f64,
    pub total_cost: f64,
}

impl PathTotals {
    pub fn add(&mut self, segment: &FlightSegment) {
        self.distance_km += segment.distance_km;
        self.block_time_hours += segment.block_time_hours;
        self.fuel_cost += segment.fuel_cost;
        self.landing_fees += segment.landing_fee;
        self.crew_cost += segment.crew_cost;
        self.maintenance_cost += segment.maintenance_cost;
        self.depreciation_cost += segment.depreciation_cost;
        self.insurance_cost += segment.insurance_cost;
        self.navigation_fees += segment.navigation_fees;
        self.ground_handling_cost += segment.ground_handling_cost;
        self.total_cost += segment.total_cost;
    }

    pub fn from_segments(segments: &[FlightSegment]) -> Self {
        let mut totals = Self::default();
        for segment in segments {
            totals.add(segment);
        }
        totals
    }
}
