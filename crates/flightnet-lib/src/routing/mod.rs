//! Route planning facade for fuel-aware flight routing.
//!
//! This module provides:
//! - [`OptimizationMode`] - Supported objectives (cheapest, fastest, balanced)
//! - [`RouteConstraints`] - Per-call constraints applied during planning
//! - [`RouteRequest`] - High-level route planning request
//! - [`FlightRoute`] - Fully priced route result
//! - [`plan_route`] - Validating entry point for computing routes
//! - [`optimize_route`] / [`compare_routes`] - Infallible convenience entry points
//!
//! # Strategy Pattern
//!
//! Each optimization mode is encapsulated in a [`RoutePlanner`] that scores
//! a fully evaluated path. The search loop in [`crate::path`] is shared by all
//! of them.
//!
//! # Example
//!
//! ```ignore
//! use flightnet_lib::{load_network, plan_route, RouteRequest, OptimizationMode};
//!
//! let network = load_network(None, aircraft, crew, None)?;
//! let request = RouteRequest::new("DEL", "JFK", OptimizationMode::Cheapest);
//! let route = plan_route(&network, &request)?;
//! println!("{} stops, ${:.2}", route.stops(), route.totals.total_cost);
//! ```

mod planner;

pub use planner::{select_planner, BalancedPlanner, CheapestPlanner, FastestPlanner, RoutePlanner};

use std::fmt;
use std::str::FromStr;
use std::thread;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aircraft::{CrewCostProfile, FuelPlan};
use crate::cost::{FlightSegment, PathTotals};
use crate::error::{Error, Result};
use crate::network::{Network, NoFlyZones};
use crate::path::{evaluate_path, find_route_fuel_aware, PathConstraints};

/// Supported optimization objectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationMode {
    /// Minimize total operating cost.
    #[default]
    Cheapest,
    /// Minimize total block time.
    Fastest,
    /// Weighted blend of normalized cost and block time.
    Balanced,
}

impl OptimizationMode {
    pub const ALL: [OptimizationMode; 3] = [
        OptimizationMode::Cheapest,
        OptimizationMode::Fastest,
        OptimizationMode::Balanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OptimizationMode::Cheapest => "cheapest",
            OptimizationMode::Fastest => "fastest",
            OptimizationMode::Balanced => "balanced",
        }
    }
}

impl fmt::Display for OptimizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptimizationMode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let label = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == label)
            .ok_or_else(|| Error::UnknownOptimizationMode {
                label: value.to_string(),
            })
    }
}

/// Coefficients of the balanced objective:
/// `cost_weight * total_cost / cost_normalization + time_weight * block_hours`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalancedWeights {
    pub cost_weight: f64,
    pub time_weight: f64,
    /// Cost in currency units treated as equivalent to one unit of weighted time.
    pub cost_normalization: f64,
}

impl Default for BalancedWeights {
    fn default() -> Self {
        Self {
            cost_weight: 0.7,
            time_weight: 0.3,
            cost_normalization: 10_000.0,
        }
    }
}

impl BalancedWeights {
    pub fn new(cost_weight: f64, time_weight: f64, cost_normalization: f64) -> Result<Self> {
        let weights = Self {
            cost_weight,
            time_weight,
            cost_normalization,
        };
        weights.validate()?;
        Ok(weights)
    }

    pub fn validate(&self) -> Result<()> {
        for (value, field) in [
            (self.cost_weight, "cost_weight"),
            (self.time_weight, "time_weight"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidBalancedWeights {
                    message: format!("{field} must be a finite non-negative number"),
                });
            }
        }
        if self.cost_weight == 0.0 && self.time_weight == 0.0 {
            return Err(Error::InvalidBalancedWeights {
                message: "cost_weight and time_weight must not both be zero".to_string(),
            });
        }
        if !self.cost_normalization.is_finite() || self.cost_normalization <= 0.0 {
            return Err(Error::InvalidBalancedWeights {
                message: "cost_normalization must be a finite positive number".to_string(),
            });
        }
        Ok(())
    }
}

/// Constraints applied during route planning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteConstraints {
    /// Airport codes closed for this request only.
    pub avoid_airports: Vec<String>,
}

impl RouteConstraints {
    fn to_search_constraints(&self) -> PathConstraints {
        PathConstraints {
            avoided_airports: NoFlyZones::new(&self.avoid_airports),
        }
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub mode: OptimizationMode,
    pub constraints: RouteConstraints,
    pub weights: BalancedWeights,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, goal: impl Into<String>, mode: OptimizationMode) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            mode,
            constraints: RouteConstraints::default(),
            weights: BalancedWeights::default(),
        }
    }

    /// Convenience constructor for cheapest routes without extra constraints.
    pub fn cheapest(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self::new(start, goal, OptimizationMode::Cheapest)
    }

    /// Convenience constructor for fastest routes without extra constraints.
    pub fn fastest(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self::new(start, goal, OptimizationMode::Fastest)
    }

    pub fn with_avoided<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints
            .avoid_airports
            .extend(codes.into_iter().map(Into::into));
        self
    }

    pub fn with_weights(mut self, weights: BalancedWeights) -> Self {
        self.weights = weights;
        self
    }
}

/// Fully priced route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightRoute {
    pub mode: OptimizationMode,
    /// Airport codes from origin to destination; empty when no route exists.
    pub path: Vec<String>,
    pub segments: Vec<FlightSegment>,
    pub totals: PathTotals,
    /// Crew rate fixed at the origin for the whole journey.
    pub crew: CrewCostProfile,
    pub fuel_plan: FuelPlan,
}

impl FlightRoute {
    /// Route representing "no route found"; its total cost is infinite.
    pub fn empty(mode: OptimizationMode, crew: CrewCostProfile) -> Self {
        Self {
            mode,
            path: Vec::new(),
            segments: Vec::new(),
            totals: PathTotals {
                total_cost: f64::INFINITY,
                ..PathTotals::default()
            },
            crew,
            fuel_plan: FuelPlan::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Intermediate airports visited.
    pub fn stops(&self) -> usize {
        self.path.len().saturating_sub(2)
    }

    pub fn origin(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    /// Airports where fuel is bought.
    pub fn refuel_points(&self) -> Vec<&str> {
        self.fuel_plan.refuel_points().collect()
    }
}

/// Cheapest and fastest routes between the same pair of airports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteComparison {
    pub cheapest: FlightRoute,
    pub fastest: FlightRoute,
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Resolve a code to the network's canonical code, with suggestions on failure.
fn resolve_airport(network: &Network, code: &str) -> Result<String> {
    network.resolve(code).map(|airport| airport.code.clone())
}

/// Resolve a list of avoided codes, rejecting any the network does not know.
fn resolve_avoided_airports(network: &Network, avoided: &[String]) -> Result<Vec<String>> {
    avoided
        .iter()
        .map(|code| resolve_airport(network, code))
        .collect()
}

/// Run the search with an explicit planner and price the winning path.
fn search_and_price(
    network: &Network,
    start: &str,
    goal: &str,
    planner: &dyn RoutePlanner,
    constraints: &PathConstraints,
) -> FlightRoute {
    let outcome = find_route_fuel_aware(network, start, goal, planner, constraints);
    if !outcome.is_found() {
        return FlightRoute::empty(planner.mode(), *network.crew());
    }

    let evaluation = evaluate_path(network, &outcome.path, planner);
    FlightRoute {
        mode: planner.mode(),
        path: outcome.path,
        segments: evaluation.segments,
        totals: evaluation.totals,
        crew: *network.crew(),
        fuel_plan: evaluation.fuel_plan,
    }
}

// =============================================================================
// Main Entry Points
// =============================================================================

/// Find the best route for `mode` using default balanced weights and no extra
/// constraints. Unknown or unreachable airports produce an empty route.
pub fn optimize_route(
    network: &Network,
    start: &str,
    goal: &str,
    mode: OptimizationMode,
) -> FlightRoute {
    let planner = select_planner(mode, BalancedWeights::default());
    search_and_price(
        network,
        start,
        goal,
        planner.as_ref(),
        &PathConstraints::default(),
    )
}

/// Plan a route for a validated request.
pub fn plan_route(network: &Network, request: &RouteRequest) -> Result<FlightRoute> {
    // Step 1: Resolve airport codes
    let start = resolve_airport(network, &request.start)?;
    let goal = resolve_airport(network, &request.goal)?;

    // Step 2: Resolve avoided airports and build search constraints
    let avoided = resolve_avoided_airports(network, &request.constraints.avoid_airports)?;
    let constraints = RouteConstraints {
        avoid_airports: avoided,
    }
    .to_search_constraints();

    // Step 3: Endpoints closed by either filter cannot be routed
    let endpoint_closed = |code: &str| {
        network.is_excluded(code) || constraints.avoided_airports.contains(code)
    };
    if start != goal && (endpoint_closed(&start) || endpoint_closed(&goal)) {
        return Err(Error::RouteNotFound { start, goal });
    }

    // Step 4: Select planner
    request.weights.validate()?;
    let planner = select_planner(request.mode, request.weights);

    // Step 5: Execute search and price the result
    let route = search_and_price(network, &start, &goal, planner.as_ref(), &constraints);
    if route.is_empty() {
        return Err(Error::RouteNotFound { start, goal });
    }

    debug!(
        start = %start,
        goal = %goal,
        mode = %request.mode,
        stops = route.stops(),
        total_cost = route.totals.total_cost,
        "planned route"
    );
    Ok(route)
}

/// Cheapest and fastest routes computed concurrently over the same network.
pub fn compare_routes(network: &Network, start: &str, goal: &str) -> RouteComparison {
    compare_with_constraints(network, start, goal, &PathConstraints::default())
}

/// Validating variant of [`compare_routes`] honoring per-call constraints.
pub fn plan_comparison(
    network: &Network,
    start: &str,
    goal: &str,
    constraints: &RouteConstraints,
) -> Result<RouteComparison> {
    let start = resolve_airport(network, start)?;
    let goal = resolve_airport(network, goal)?;
    let constraints = RouteConstraints {
        avoid_airports: resolve_avoided_airports(network, &constraints.avoid_airports)?,
    }
    .to_search_constraints();

    let comparison = compare_with_constraints(network, &start, &goal, &constraints);
    if comparison.cheapest.is_empty() && comparison.fastest.is_empty() {
        return Err(Error::RouteNotFound { start, goal });
    }
    Ok(comparison)
}

fn compare_with_constraints(
    network: &Network,
    start: &str,
    goal: &str,
    constraints: &PathConstraints,
) -> RouteComparison {
    thread::scope(|scope| {
        let cheapest = scope
            .spawn(|| search_and_price(network, start, goal, &CheapestPlanner, constraints));
        let fastest = search_and_price(network, start, goal, &FastestPlanner, constraints);
        let cheapest = cheapest
            .join()
            .unwrap_or_else(|payload| std::panic::resume_unwind(payload));
        RouteComparison { cheapest, fastest }
    })
}
