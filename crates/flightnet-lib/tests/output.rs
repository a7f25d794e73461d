mod common;

use flightnet_lib::{
    compare_routes, optimize_route, ComparisonReport, OptimizationMode, RouteRenderMode,
    RouteReport, RouteSummary,
};

use common::{corridor_network, sample_network};

#[test]
fn route_summary_json_shape() {
    let network = corridor_network();
    let route = optimize_route(&network, "AAA", "CCC", OptimizationMode::Cheapest);
    let report = RouteReport::from_route(&network, &route);
    let json = serde_json::to_value(&report).expect("serializes");

    let overview = &json["route_overview"];
    assert_eq!(overview["optimization_mode"], "cheapest");
    assert_eq!(overview["route_path"], "AAA → BBB → CCC");
    assert_eq!(overview["number_of_stops"], 1);
    assert_eq!(overview["origin"]["name"], "Alpha Field");
    assert_eq!(overview["destination"]["country"], "Caldera");
    assert_eq!(overview["aircraft_category"], "Widebody Long Range");
    assert_eq!(overview["crew_cost_structure"], "$300/hour (Origin-based)");

    let segments = json["flight_segments"].as_array().expect("segments array");
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0]["segment_number"], 1);
    assert_eq!(segments[1]["from"]["code"], "BBB");
    assert_eq!(segments[1]["refuel_info"]["requires_refuel"], true);
    assert_eq!(segments[1]["refuel_info"]["fuel_price_per_kg"], 0.5);
}

#[test]
fn summary_keys_match_downstream_contract() {
    let network = sample_network();
    let comparison = compare_routes(&network, "DEL", "JFK");
    let report = ComparisonReport::from_comparison(&network, &comparison);
    let json = serde_json::to_value(&report).expect("serializes");

    for side in ["cheapest", "fastest"] {
        let summary = json[side].as_object().expect("summary object");
        let mut top: Vec<&str> = summary.keys().map(String::as_str).collect();
        top.sort_unstable();
        assert_eq!(
            top,
            vec!["detailed_cost_breakdown", "flight_segments", "route_overview"]
        );

        let overview = &json[side]["route_overview"];
        for key in [
            "optimization_mode",
            "origin",
            "destination",
            "route_path",
            "total_distance_km",
            "total_flight_time_hours",
            "number_of_stops",
            "total_cost_usd",
            "aircraft_category",
            "crew_cost_structure",
        ] {
            assert!(!overview[key].is_null(), "route_overview.{key} missing");
        }

        let breakdown = &json[side]["detailed_cost_breakdown"];
        for key in [
            "fuel_cost_usd",
            "landing_fees_usd",
            "crew_cost_usd",
            "maintenance_cost_usd",
            "depreciation_cost_usd",
            "insurance_cost_usd",
            "navigation_fees_usd",
            "ground_handling_cost_usd",
            "cost_per_km_usd",
            "cost_per_hour_usd",
        ] {
            assert!(breakdown[key].is_number(), "detailed_cost_breakdown.{key} missing");
        }

        let first = &json[side]["flight_segments"][0];
        for key in [
            "segment_number",
            "from",
            "to",
            "distance_km",
            "flight_time_hours",
            "fuel_needed_kg",
            "refuel_info",
            "detailed_costs",
        ] {
            assert!(!first[key].is_null(), "flight_segments[0].{key} missing");
        }
        assert!(first["refuel_info"]["requires_refuel"].is_boolean());
        for key in [
            "fuel_cost_usd",
            "landing_fee_usd",
            "crew_cost_usd",
            "maintenance_cost_usd",
            "depreciation_cost_usd",
            "insurance_cost_usd",
            "navigation_fees_usd",
            "ground_handling_cost_usd",
            "total_segment_cost_usd",
        ] {
            assert!(first["detailed_costs"][key].is_number(), "detailed_costs.{key} missing");
        }
    }
}

#[test]
fn summary_values_are_rounded_to_cents() {
    let network = corridor_network();
    let route = optimize_route(&network, "AAA", "CCC", OptimizationMode::Fastest);
    let summary = RouteSummary::from_route(&network, &route).expect("route exists");

    let breakdown = &summary.cost_breakdown;
    for value in [
        breakdown.fuel_cost,
        breakdown.crew_cost,
        breakdown.total_cost,
        breakdown.cost_per_km,
        breakdown.cost_per_hour,
        summary.overview.total_distance_km,
    ] {
        assert!(((value * 100.0).round() - value * 100.0).abs() < 1e-6);
    }
    let expected_per_km = route.totals.total_cost / route.totals.distance_km;
    assert!((breakdown.cost_per_km - expected_per_km).abs() <= 0.005 + 1e-9);
}

#[test]
fn comparison_report_handles_missing_route() {
    let network = corridor_network();
    let comparison = compare_routes(&network, "AAA", "ISL");
    let report = ComparisonReport::from_comparison(&network, &comparison);

    let json = serde_json::to_value(&report).expect("serializes");
    assert_eq!(json["cheapest"]["error"], "No valid route found");
    assert_eq!(json["fastest"]["error"], "No valid route found");

    let text = report.render(RouteRenderMode::PlainText);
    assert_eq!(text, "No valid route found\n\nNo valid route found\n");
}

#[test]
fn rich_rendering_marks_refuel_stops() {
    let network = corridor_network();
    let route = optimize_route(&network, "AAA", "CCC", OptimizationMode::Balanced);
    let text = RouteReport::from_route(&network, &route).render(RouteRenderMode::RichText);
    assert!(text.starts_with("**Balanced route**"));
    assert!(text.contains("`AAA` → `BBB`"));
    assert!(text.contains("⛽"));
}
