//! FlightNet library entry points.
//!
//! This crate exposes helpers to load airport reference data, build a priced
//! airport network for one aircraft and crew profile, and run fuel-aware route
//! searches over it. Higher-level consumers (the CLI) should only depend on the
//! functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod aircraft;
pub mod cost;
pub mod dataset;
pub mod error;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;
pub mod spatial;

pub use aircraft::{
    plan_fuel_purchases, Aircraft, AircraftCatalog, AircraftCostProfile, CrewCostProfile,
    CrewRegion, FuelPlan,
};
pub use cost::{calculate_segment, FlightSegment, PathTotals};
pub use dataset::{
    builtin_network_airports, default_dataset_path, load_airports, load_network,
    resolve_dataset_source, DatasetSource, AIRPORTS_ENV_VAR,
};
pub use error::{Error, Result};
pub use network::{Airport, AirportSpec, AirspaceFilter, Network, NoFlyZones, Unrestricted};
pub use output::{ComparisonReport, RouteRenderMode, RouteReport, RouteSummary};
pub use path::{evaluate_path, find_route_fuel_aware, PathConstraints, SearchOutcome};
pub use routing::{
    compare_routes, optimize_route, plan_comparison, plan_route, BalancedWeights, FlightRoute,
    OptimizationMode, RouteComparison, RouteConstraints, RoutePlanner, RouteRequest,
};
pub use spatial::{haversine_distance, Coordinates};
