//! Fuel purchase planning and tank simulation.
//!
//! A [`FuelPlan`] records how many kilograms of fuel are bought at each
//! departure airport along one specific path. Plans are a function of the
//! whole path: extending or reordering a path requires computing a new plan.

use serde::{Deserialize, Serialize};

use crate::network::Network;

use super::attributes::Aircraft;

/// One leg of a path reduced to what the planner needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg<'a> {
    pub origin: &'a str,
    pub destination: &'a str,
    pub distance_km: f64,
}

/// Fuel bought at a single airport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelPurchase {
    pub airport: String,
    pub kg: f64,
}

/// Kilograms of fuel purchased per airport for one ordered path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FuelPlan {
    purchases: Vec<FuelPurchase>,
}

impl FuelPlan {
    /// Record a purchase, merging with any earlier purchase at the same airport.
    pub fn record(&mut self, airport: &str, kg: f64) {
        if let Some(existing) = self.purchases.iter_mut().find(|p| p.airport == airport) {
            existing.kg += kg;
        } else {
            self.purchases.push(FuelPurchase {
                airport: airport.to_string(),
                kg,
            });
        }
    }

    /// Fuel bought at `airport`, if any.
    pub fn purchase_at(&self, airport: &str) -> Option<f64> {
        self.purchases
            .iter()
            .find(|p| p.airport == airport)
            .map(|p| p.kg)
    }

    /// Purchases in the order they occur along the path.
    pub fn purchases(&self) -> &[FuelPurchase] {
        &self.purchases
    }

    /// Airports where a non-zero purchase happens.
    pub fn refuel_points(&self) -> impl Iterator<Item = &str> {
        self.purchases.iter().map(|p| p.airport.as_str())
    }

    pub fn total_purchased_kg(&self) -> f64 {
        self.purchases.iter().map(|p| p.kg).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.purchases.is_empty()
    }
}

/// Tank state around one leg when following a [`FuelPlan`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TankLevel {
    pub origin: String,
    pub destination: String,
    pub purchased_kg: f64,
    /// Fuel on board at departure, after any purchase.
    pub departure_kg: f64,
    /// Fuel on board on arrival.
    pub arrival_kg: f64,
}

/// Decide where fuel must be bought along a sequence of legs.
///
/// Starting from an empty tank, each leg that cannot be flown on the fuel
/// already carried triggers a purchase at the leg's origin of
/// `min(shortfall, capacity - on_board)`. Fuel is never bought at a leg's
/// destination; that airport only buys when a later leg departs from it.
pub fn plan_fuel_for_legs(aircraft: &Aircraft, legs: &[Leg<'_>]) -> FuelPlan {
    let mut plan = FuelPlan::default();
    let mut on_board = 0.0_f64;

    for leg in legs {
        let required = aircraft.fuel_required_kg(leg.distance_km);

        if on_board < required {
            let purchase = (required - on_board).min(aircraft.max_fuel_capacity_kg - on_board);
            if purchase > 0.0 {
                plan.record(leg.origin, purchase);
                on_board += purchase;
            }
        }

        on_board -= required;
    }

    plan
}

/// Resolve the legs of `path` against the network's distances.
pub fn legs_for_path<'a, S: AsRef<str>>(network: &Network, path: &'a [S]) -> Vec<Leg<'a>> {
    path.windows(2)
        .map(|pair| {
            let origin = pair[0].as_ref();
            let destination = pair[1].as_ref();
            Leg {
                origin,
                destination,
                distance_km: network.distance(origin, destination),
            }
        })
        .collect()
}

/// Compute the fuel plan for a complete path. Paths shorter than two
/// airports produce an empty plan.
pub fn plan_fuel_purchases<S: AsRef<str>>(network: &Network, path: &[S]) -> FuelPlan {
    if path.len() < 2 {
        return FuelPlan::default();
    }
    let legs = legs_for_path(network, path);
    plan_fuel_for_legs(network.aircraft(), &legs)
}

/// Replay `plan` along `legs`, reporting the tank level around every leg.
pub fn simulate_tank(aircraft: &Aircraft, legs: &[Leg<'_>], plan: &FuelPlan) -> Vec<TankLevel> {
    let mut on_board = 0.0_f64;
    let mut levels = Vec::with_capacity(legs.len());

    for leg in legs {
        let purchased = plan.purchase_at(leg.origin).unwrap_or(0.0);
        on_board += purchased;
        let departure = on_board;
        on_board -= aircraft.fuel_required_kg(leg.distance_km);

        levels.push(TankLevel {
            origin: leg.origin.to_string(),
            destination: leg.destination.to_string(),
            purchased_kg: purchased,
            departure_kg: departure,
            arrival_kg: on_board,
        });
    }

    levels
}
