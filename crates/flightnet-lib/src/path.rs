use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::{debug, trace};

use crate::aircraft::{plan_fuel_purchases, FuelPlan};
use crate::cost::{calculate_segment, FlightSegment, PathTotals};
use crate::network::{Network, NoFlyZones};
use crate::routing::RoutePlanner;

/// Constraints applied during a single search on top of the network's own
/// airspace filter.
#[derive(Debug, Default, Clone)]
pub struct PathConstraints {
    /// Airports that must not appear anywhere in the resulting path.
    pub avoided_airports: NoFlyZones,
}

impl PathConstraints {
    fn allows(&self, target: &str) -> bool {
        !self.avoided_airports.contains(target)
    }
}

/// Complete evaluation of one concrete path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathEvaluation {
    pub fuel_plan: FuelPlan,
    pub segments: Vec<FlightSegment>,
    pub totals: PathTotals,
    pub metric: f64,
}

/// Plan fuel for `path`, price every leg under that plan and score the totals.
///
/// A path with fewer than two airports has no segments and scores zero.
pub fn evaluate_path<S: AsRef<str>>(
    network: &Network,
    path: &[S],
    planner: &dyn RoutePlanner,
) -> PathEvaluation {
    let fuel_plan = plan_fuel_purchases(network, path);
    let segments: Vec<FlightSegment> = path
        .windows(2)
        .map(|pair| calculate_segment(network, pair[0].as_ref(), pair[1].as_ref(), &fuel_plan))
        .collect();
    let totals = PathTotals::from_segments(&segments);
    let metric = if segments.is_empty() {
        0.0
    } else {
        planner.metric(&totals)
    };

    PathEvaluation {
        fuel_plan,
        segments,
        totals,
        metric,
    }
}

/// Result of a fuel-aware search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Airport codes from start to goal; empty when the goal is unreachable.
    pub path: Vec<String>,
    pub metric: f64,
    /// Number of candidate paths fully evaluated.
    pub evaluations: usize,
}

impl SearchOutcome {
    fn unreachable(evaluations: usize) -> Self {
        Self {
            path: Vec::new(),
            metric: f64::INFINITY,
            evaluations,
        }
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Label-setting search where the weight of a leg depends on the path that
/// reaches it.
///
/// Fuel purchases along a path are decided for the path as a whole, so each
/// relaxation evaluates the entire candidate path from scratch rather than
/// adding a fixed edge weight. Every airport pair within safe range is an
/// edge. The planner's metric never decreases as a path grows, which keeps
/// greedy finalization correct.
pub fn find_route_fuel_aware(
    network: &Network,
    start: &str,
    goal: &str,
    planner: &dyn RoutePlanner,
    constraints: &PathConstraints,
) -> SearchOutcome {
    let (Some(start_airport), Some(goal_airport)) = (network.airport(start), network.airport(goal))
    else {
        return SearchOutcome::unreachable(0);
    };
    let start = start_airport.code.as_str();
    let goal = goal_airport.code.as_str();

    if start == goal {
        return SearchOutcome {
            path: vec![start.to_string()],
            metric: 0.0,
            evaluations: 0,
        };
    }
    if !constraints.allows(start) || !constraints.allows(goal) {
        return SearchOutcome::unreachable(0);
    }

    let mut best_metric: HashMap<&str, f64> = HashMap::new();
    let mut best_path: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut parents: HashMap<&str, Option<&str>> = HashMap::new();
    let mut finalized: HashSet<&str> = HashSet::new();
    let mut queue = BinaryHeap::new();
    let mut evaluations = 0usize;

    best_metric.insert(start, 0.0);
    best_path.insert(start, vec![start]);
    parents.insert(start, None);
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        let current = entry.node;
        if !finalized.insert(current) {
            continue;
        }

        if current == goal {
            let path = reconstruct_path(&parents, start, goal);
            debug_assert_eq!(best_path.get(goal), Some(&path));
            debug!(
                start,
                goal,
                mode = %planner.mode(),
                evaluations,
                metric = entry.cost.0,
                "fuel-aware search reached goal"
            );
            return SearchOutcome {
                path: path.into_iter().map(str::to_string).collect(),
                metric: entry.cost.0,
                evaluations,
            };
        }

        let Some(prefix) = best_path.get(current).cloned() else {
            continue;
        };

        for airport in network.airports() {
            let next = airport.code.as_str();
            if next == current || finalized.contains(next) || !constraints.allows(next) {
                continue;
            }
            if !network.can_fly_direct(current, next) {
                continue;
            }

            let mut candidate = prefix.clone();
            candidate.push(next);
            let metric = evaluate_path(network, &candidate, planner).metric;
            evaluations += 1;

            let known = best_metric.get(next).copied().unwrap_or(f64::INFINITY);
            if metric < known {
                trace!(from = current, to = next, metric, "relaxed");
                best_metric.insert(next, metric);
                best_path.insert(next, candidate);
                parents.insert(next, Some(current));
                queue.push(QueueEntry::new(next, metric));
            }
        }
    }

    debug!(
        start,
        goal,
        mode = %planner.mode(),
        evaluations,
        "fuel-aware search exhausted without reaching goal"
    );
    SearchOutcome::unreachable(evaluations)
}

fn reconstruct_path<'a>(
    parents: &HashMap<&'a str, Option<&'a str>>,
    start: &'a str,
    goal: &'a str,
) -> Vec<&'a str> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'a> {
    node: &'a str,
    cost: FloatOrd,
}

impl<'a> QueueEntry<'a> {
    fn new(node: &'a str, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then by code.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aircraft::{Aircraft, CrewRegion};
    use crate::network::AirportSpec;
    use crate::routing::{CheapestPlanner, FastestPlanner};

    /// Three airports on the equator, 50° apart (~5560 km per hop). The
    /// direct A-C hop (~11119 km) is inside the 11700 km safe range.
    fn line_network() -> Network {
        let mut network =
            Network::new(Aircraft::widebody_long_range(), CrewRegion::Default.profile()).unwrap();
        network
            .extend_airports([
                AirportSpec::new("AAA", "Alpha", "X", 0.0, 0.0, 1.0, 1000.0),
                AirportSpec::new("BBB", "Bravo", "X", 0.0, 50.0, 0.5, 1000.0),
                AirportSpec::new("CCC", "Charlie", "X", 0.0, 100.0, 1.0, 1000.0),
            ])
            .unwrap();
        network
    }

    #[test]
    fn queue_pops_lowest_cost_then_code() {
        let mut heap = BinaryHeap::new();
        heap.push(QueueEntry::new("ZZZ", 1.0));
        heap.push(QueueEntry::new("BBB", 2.0));
        heap.push(QueueEntry::new("AAA", 1.0));
        assert_eq!(heap.pop().map(|e| e.node), Some("AAA"));
        assert_eq!(heap.pop().map(|e| e.node), Some("ZZZ"));
        assert_eq!(heap.pop().map(|e| e.node), Some("BBB"));
    }

    #[test]
    fn single_airport_path_scores_zero() {
        let network = line_network();
        let evaluation = evaluate_path(&network, &["AAA"], &CheapestPlanner);
        assert_eq!(evaluation.metric, 0.0);
        assert!(evaluation.segments.is_empty());
        assert!(evaluation.fuel_plan.is_empty());
    }

    #[test]
    fn evaluation_metric_matches_totals() {
        let network = line_network();
        let evaluation = evaluate_path(&network, &["AAA", "BBB", "CCC"], &CheapestPlanner);
        assert_eq!(evaluation.segments.len(), 2);
        assert_eq!(evaluation.metric, evaluation.totals.total_cost);
    }

    #[test]
    fn same_start_and_goal_is_trivial() {
        let network = line_network();
        let outcome = find_route_fuel_aware(
            &network,
            "bbb",
            "BBB",
            &CheapestPlanner,
            &PathConstraints::default(),
        );
        assert_eq!(outcome.path, vec!["BBB".to_string()]);
        assert_eq!(outcome.metric, 0.0);
    }

    #[test]
    fn unknown_codes_are_unreachable() {
        let network = line_network();
        let outcome = find_route_fuel_aware(
            &network,
            "AAA",
            "QQQ",
            &CheapestPlanner,
            &PathConstraints::default(),
        );
        assert!(!outcome.is_found());
        assert!(outcome.metric.is_infinite());
    }

    #[test]
    fn fastest_prefers_direct_hop() {
        let network = line_network();
        let outcome = find_route_fuel_aware(
            &network,
            "AAA",
            "CCC",
            &FastestPlanner,
            &PathConstraints::default(),
        );
        // One ground turn fewer than going through BBB.
        assert_eq!(outcome.path, vec!["AAA".to_string(), "CCC".to_string()]);
    }

    #[test]
    fn avoided_intermediate_is_never_used() {
        let network = line_network();
        let constraints = PathConstraints {
            avoided_airports: NoFlyZones::new(["BBB"]),
        };
        let outcome =
            find_route_fuel_aware(&network, "AAA", "CCC", &CheapestPlanner, &constraints);
        assert!(outcome.path.iter().all(|code| code != "BBB"));
    }

    #[test]
    fn reported_metric_equals_reevaluated_path() {
        let network = line_network();
        let outcome = find_route_fuel_aware(
            &network,
            "AAA",
            "CCC",
            &CheapestPlanner,
            &PathConstraints::default(),
        );
        let evaluation = evaluate_path(&network, &outcome.path, &CheapestPlanner);
        assert!((evaluation.metric - outcome.metric).abs() < 1e-9);
    }
}
