use std::fmt::Write;

use serde::Serialize;

use crate::cost::FlightSegment;
use crate::error::{Error, Result};
use crate::network::Network;
use crate::routing::{FlightRoute, OptimizationMode, RouteComparison};

/// Payload used whenever a route could not be produced.
pub const NO_ROUTE_MESSAGE: &str = "No valid route found";

/// Presentation style for turning a [`RouteReport`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteRenderMode {
    #[default]
    PlainText,
    RichText,
}

/// Airport identity as shown in reports.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteEndpoint {
    pub code: String,
    pub name: String,
    pub country: String,
}

impl RouteEndpoint {
    fn lookup(network: &Network, code: &str) -> Self {
        match network.airport(code) {
            Some(airport) => Self {
                code: airport.code.clone(),
                name: airport.name.clone(),
                country: airport.country.clone(),
            },
            None => Self {
                code: code.to_string(),
                name: String::new(),
                country: String::new(),
            },
        }
    }

    fn display_name(&self) -> String {
        if self.name.is_empty() {
            self.code.clone()
        } else {
            format!("{} ({}, {})", self.code, self.name, self.country)
        }
    }
}

/// Headline figures for a route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteOverview {
    #[serde(rename = "optimization_mode")]
    pub mode: OptimizationMode,
    pub origin: RouteEndpoint,
    pub destination: RouteEndpoint,
    /// Codes joined with arrows, e.g. `DEL → DXB → JFK`.
    #[serde(rename = "route_path")]
    pub route: String,
    pub total_distance_km: f64,
    #[serde(rename = "total_flight_time_hours")]
    pub total_block_time_hours: f64,
    #[serde(rename = "number_of_stops")]
    pub stops: usize,
    #[serde(rename = "total_cost_usd")]
    pub total_cost: f64,
    pub aircraft_category: String,
    #[serde(rename = "crew_cost_structure")]
    pub crew_cost_rate: String,
}

/// Route totals per cost category plus unit costs.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CostBreakdown {
    #[serde(rename = "fuel_cost_usd")]
    pub fuel_cost: f64,
    #[serde(rename = "landing_fees_usd")]
    pub landing_fees: f64,
    #[serde(rename = "crew_cost_usd")]
    pub crew_cost: f64,
    #[serde(rename = "maintenance_cost_usd")]
    pub maintenance_cost: f64,
    #[serde(rename = "depreciation_cost_usd")]
    pub depreciation_cost: f64,
    #[serde(rename = "insurance_cost_usd")]
    pub insurance_cost: f64,
    #[serde(rename = "navigation_fees_usd")]
    pub navigation_fees: f64,
    #[serde(rename = "ground_handling_cost_usd")]
    pub ground_handling_cost: f64,
    #[serde(rename = "total_cost_usd")]
    pub total_cost: f64,
    #[serde(rename = "cost_per_km_usd")]
    pub cost_per_km: f64,
    #[serde(rename = "cost_per_hour_usd")]
    pub cost_per_hour: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RefuelInfo {
    pub requires_refuel: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_price_per_kg: Option<f64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SegmentCosts {
    #[serde(rename = "fuel_cost_usd")]
    pub fuel: f64,
    #[serde(rename = "landing_fee_usd")]
    pub landing: f64,
    #[serde(rename = "crew_cost_usd")]
    pub crew: f64,
    #[serde(rename = "maintenance_cost_usd")]
    pub maintenance: f64,
    #[serde(rename = "depreciation_cost_usd")]
    pub depreciation: f64,
    #[serde(rename = "insurance_cost_usd")]
    pub insurance: f64,
    #[serde(rename = "navigation_fees_usd")]
    pub navigation: f64,
    #[serde(rename = "ground_handling_cost_usd")]
    pub ground_handling: f64,
    #[serde(rename = "total_segment_cost_usd")]
    pub total: f64,
}

/// One leg of a route as shown in reports.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SegmentSummary {
    /// 1-based position along the route.
    #[serde(rename = "segment_number")]
    pub number: usize,
    pub from: RouteEndpoint,
    pub to: RouteEndpoint,
    pub distance_km: f64,
    #[serde(rename = "flight_time_hours")]
    pub block_time_hours: f64,
    pub fuel_needed_kg: f64,
    pub refuel_info: RefuelInfo,
    #[serde(rename = "detailed_costs")]
    pub costs: SegmentCosts,
}

impl SegmentSummary {
    fn from_segment(network: &Network, number: usize, segment: &FlightSegment) -> Self {
        let fuel_price_per_kg = if segment.requires_refuel {
            network
                .airport(&segment.from)
                .map(|airport| round2(airport.fuel_price_per_kg))
        } else {
            None
        };

        Self {
            number,
            from: RouteEndpoint::lookup(network, &segment.from),
            to: RouteEndpoint::lookup(network, &segment.to),
            distance_km: round2(segment.distance_km),
            block_time_hours: round2(segment.block_time_hours),
            fuel_needed_kg: round2(segment.fuel_needed_kg),
            refuel_info: RefuelInfo {
                requires_refuel: segment.requires_refuel,
                fuel_price_per_kg,
            },
            costs: SegmentCosts {
                fuel: round2(segment.fuel_cost),
                landing: round2(segment.landing_fee),
                crew: round2(segment.crew_cost),
                maintenance: round2(segment.maintenance_cost),
                depreciation: round2(segment.depreciation_cost),
                insurance: round2(segment.insurance_cost),
                navigation: round2(segment.navigation_fees),
                ground_handling: round2(segment.ground_handling_cost),
                total: round2(segment.total_cost),
            },
        }
    }
}

/// Structured, serializable description of a found route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    #[serde(rename = "route_overview")]
    pub overview: RouteOverview,
    #[serde(rename = "detailed_cost_breakdown")]
    pub cost_breakdown: CostBreakdown,
    #[serde(rename = "flight_segments")]
    pub segments: Vec<SegmentSummary>,
}

impl RouteSummary {
    /// Convert a [`FlightRoute`] into a summary with resolved airport names.
    pub fn from_route(network: &Network, route: &FlightRoute) -> Result<Self> {
        let (Some(origin), Some(destination)) = (route.origin(), route.destination()) else {
            return Err(Error::EmptyRoute);
        };

        let totals = &route.totals;
        let cost_per_km = if totals.distance_km > 0.0 {
            totals.total_cost / totals.distance_km
        } else {
            0.0
        };
        let cost_per_hour = if totals.block_time_hours > 0.0 {
            totals.total_cost / totals.block_time_hours
        } else {
            0.0
        };

        let overview = RouteOverview {
            mode: route.mode,
            origin: RouteEndpoint::lookup(network, origin),
            destination: RouteEndpoint::lookup(network, destination),
            route: route.path.join(" → "),
            total_distance_km: round2(totals.distance_km),
            total_block_time_hours: round2(totals.block_time_hours),
            stops: route.stops(),
            total_cost: round2(totals.total_cost),
            aircraft_category: network.aircraft().category.clone(),
            crew_cost_rate: route.crew.label(),
        };

        let cost_breakdown = CostBreakdown {
            fuel_cost: round2(totals.fuel_cost),
            landing_fees: round2(totals.landing_fees),
            crew_cost: round2(totals.crew_cost),
            maintenance_cost: round2(totals.maintenance_cost),
            depreciation_cost: round2(totals.depreciation_cost),
            insurance_cost: round2(totals.insurance_cost),
            navigation_fees: round2(totals.navigation_fees),
            ground_handling_cost: round2(totals.ground_handling_cost),
            total_cost: round2(totals.total_cost),
            cost_per_km: round2(cost_per_km),
            cost_per_hour: round2(cost_per_hour),
        };

        let segments = route
            .segments
            .iter()
            .enumerate()
            .map(|(index, segment)| SegmentSummary::from_segment(network, index + 1, segment))
            .collect();

        Ok(Self {
            overview,
            cost_breakdown,
            segments,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let overview = &self.overview;
        let breakdown = &self.cost_breakdown;
        let mut buffer = String::new();

        let _ = writeln!(
            buffer,
            "Route ({}): {} -> {}",
            overview.mode,
            overview.origin.display_name(),
            overview.destination.display_name()
        );
        let _ = writeln!(buffer, "Path: {}", overview.route);
        let _ = writeln!(
            buffer,
            "Distance: {:.2} km | Block time: {:.2} h | Stops: {}",
            overview.total_distance_km, overview.total_block_time_hours, overview.stops
        );
        let _ = writeln!(buffer, "Total cost: ${:.2}", overview.total_cost);
        let _ = writeln!(
            buffer,
            "Aircraft: {} | Crew: {}",
            overview.aircraft_category, overview.crew_cost_rate
        );

        if !self.segments.is_empty() {
            let _ = writeln!(buffer, "Segments:");
            for segment in &self.segments {
                let refuel = match segment.refuel_info.fuel_price_per_kg {
                    Some(price) => format!("refuel at ${price:.2}/kg"),
                    None => "no refuel".to_string(),
                };
                let _ = writeln!(
                    buffer,
                    "{:>3}. {} -> {}  {:.2} km  {:.2} h  {}  ${:.2}",
                    segment.number,
                    segment.from.code,
                    segment.to.code,
                    segment.distance_km,
                    segment.block_time_hours,
                    refuel,
                    segment.costs.total
                );
            }
        }

        let _ = writeln!(buffer, "Cost breakdown:");
        for (label, value) in breakdown.lines() {
            let _ = writeln!(buffer, "  {label:<16} ${value:.2}");
        }
        let _ = writeln!(
            buffer,
            "  {:<16} ${:.2}/km, ${:.2}/h",
            "Unit cost", breakdown.cost_per_km, breakdown.cost_per_hour
        );

        buffer
    }

    fn render_rich(&self) -> String {
        let overview = &self.overview;
        let mut buffer = String::new();

        let _ = writeln!(
            buffer,
            "**{} route** _{} → {}_",
            capitalize(overview.mode.as_str()),
            overview.origin.display_name(),
            overview.destination.display_name()
        );
        let _ = writeln!(buffer, "`{}`", overview.route);
        let _ = writeln!(
            buffer,
            "* **{:.2} km**, **{:.2} h**, {} stop(s), **${:.2}**",
            overview.total_distance_km,
            overview.total_block_time_hours,
            overview.stops,
            overview.total_cost
        );
        for segment in &self.segments {
            let marker = if segment.refuel_info.requires_refuel {
                " ⛽"
            } else {
                ""
            };
            let _ = writeln!(
                buffer,
                "* {:>2}. `{}` → `{}` ({:.2} km, ${:.2}){}",
                segment.number,
                segment.from.code,
                segment.to.code,
                segment.distance_km,
                segment.costs.total,
                marker
            );
        }
        buffer
    }
}

impl CostBreakdown {
    fn lines(&self) -> [(&'static str, f64); 9] {
        [
            ("Fuel", self.fuel_cost),
            ("Landing fees", self.landing_fees),
            ("Crew", self.crew_cost),
            ("Maintenance", self.maintenance_cost),
            ("Depreciation", self.depreciation_cost),
            ("Insurance", self.insurance_cost),
            ("Navigation", self.navigation_fees),
            ("Ground handling", self.ground_handling_cost),
            ("Total", self.total_cost),
        ]
    }
}

/// Either a route summary or an explicit "no route" payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum RouteReport {
    Route(RouteSummary),
    Error { error: String },
}

impl RouteReport {
    /// Summarize `route`; an empty route becomes the error payload.
    pub fn from_route(network: &Network, route: &FlightRoute) -> Self {
        match RouteSummary::from_route(network, route) {
            Ok(summary) => RouteReport::Route(summary),
            Err(_) => RouteReport::Error {
                error: NO_ROUTE_MESSAGE.to_string(),
            },
        }
    }

    pub fn summary(&self) -> Option<&RouteSummary> {
        match self {
            RouteReport::Route(summary) => Some(summary),
            RouteReport::Error { .. } => None,
        }
    }

    pub fn render(&self, mode: RouteRenderMode) -> String {
        match self {
            RouteReport::Route(summary) => summary.render(mode),
            RouteReport::Error { error } => match mode {
                RouteRenderMode::PlainText => format!("{error}\n"),
                RouteRenderMode::RichText => format!("**{error}**\n"),
            },
        }
    }
}

/// Side-by-side reports for the cheapest and fastest routes.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonReport {
    pub cheapest: RouteReport,
    pub fastest: RouteReport,
}

impl ComparisonReport {
    pub fn from_comparison(network: &Network, comparison: &RouteComparison) -> Self {
        Self {
            cheapest: RouteReport::from_route(network, &comparison.cheapest),
            fastest: RouteReport::from_route(network, &comparison.fastest),
        }
    }

    pub fn render(&self, mode: RouteRenderMode) -> String {
        let mut buffer = self.cheapest.render(mode);
        buffer.push('\n');
        buffer.push_str(&self.fastest.render(mode));

        if let (Some(cheapest), Some(fastest)) = (self.cheapest.summary(), self.fastest.summary()) {
            let saved_cost = fastest.overview.total_cost - cheapest.overview.total_cost;
            let saved_time =
                cheapest.overview.total_block_time_hours - fastest.overview.total_block_time_hours;
            let _ = writeln!(
                buffer,
                "\nCheapest saves ${saved_cost:.2}; fastest saves {saved_time:.2} h"
            );
        }
        buffer
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
