//! Route planning strategies implementing the Strategy pattern.
//!
//! Each optimization mode is a `RoutePlanner` that turns the totals of a
//! fully evaluated path into the scalar metric the search minimizes. Adding a
//! new objective means adding a planner, not touching the search loop.

use crate::cost::PathTotals;

use super::{BalancedWeights, OptimizationMode};

/// Trait for route planning strategies.
///
/// Implementations must return a metric that never decreases when a path is
/// extended by another leg; the search relies on this to finalize airports
/// greedily.
pub trait RoutePlanner: Send + Sync {
    /// The optimization mode this planner implements.
    fn mode(&self) -> OptimizationMode;

    /// Score a completely evaluated path. Lower is better.
    fn metric(&self, totals: &PathTotals) -> f64;
}

/// Minimizes the summed total cost of all segments.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheapestPlanner;

impl RoutePlanner for CheapestPlanner {
    fn mode(&self) -> OptimizationMode {
        OptimizationMode::Cheapest
    }

    fn metric(&self, totals: &PathTotals) -> f64 {
        totals.total_cost
    }
}

/// Minimizes summed block time.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastestPlanner;

impl RoutePlanner for FastestPlanner {
    fn mode(&self) -> OptimizationMode {
        OptimizationMode::Fastest
    }

    fn metric(&self, totals: &PathTotals) -> f64 {
        totals.block_time_hours
    }
}

/// Weighted blend of normalized cost and block time.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalancedPlanner {
    weights: BalancedWeights,
}

impl BalancedPlanner {
    pub fn new(weights: BalancedWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> BalancedWeights {
        self.weights
    }
}

impl RoutePlanner for BalancedPlanner {
    fn mode(&self) -> OptimizationMode {
        OptimizationMode::Balanced
    }

    fn metric(&self, totals: &PathTotals) -> f64 {
        let normalized_cost = totals.total_cost / self.weights.cost_normalization;
        self.weights.cost_weight * normalized_cost
            + self.weights.time_weight * totals.block_time_hours
    }
}

/// Select the planner for a mode.
pub fn select_planner(mode: OptimizationMode, weights: BalancedWeights) -> Box<dyn RoutePlanner> {
    match mode {
        OptimizationMode::Cheapest => Box::new(CheapestPlanner),
        OptimizationMode::Fastest => Box::new(FastestPlanner),
        OptimizationMode::Balanced => Box::new(BalancedPlanner::new(weights)),
    }
}
