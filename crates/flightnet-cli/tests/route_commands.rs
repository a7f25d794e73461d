use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .join(name)
        .canonicalize()
        .expect("fixture present")
}

fn prepare_command() -> Command {
    let mut cmd = cargo_bin_cmd!("flightnet");
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .env_remove("FLIGHTNET_AIRPORTS")
        .arg("--no-logo")
        .arg("--airports")
        .arg(fixture("corridor_airports.json"));
    cmd
}

#[test]
fn route_text_output_lists_refuel_stop() {
    prepare_command()
        .args(["route", "--from", "aaa", "--to", "CCC"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Route (cheapest): AAA (Alpha Field, Atlantis) -> CCC (Charlie International, Caldera)",
        ))
        .stdout(predicate::str::contains("Path: AAA → BBB → CCC"))
        .stdout(predicate::str::contains("Stops: 1"))
        .stdout(predicate::str::contains("refuel at $0.50/kg"))
        .stdout(predicate::str::contains("Completed in").not());
}

#[test]
fn route_json_output_is_machine_readable() {
    let output = prepare_command()
        .args(["--format", "json", "route", "--from", "AAA", "--to", "CCC"])
        .args(["--mode", "fastest", "--crew-region", "europe"])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let overview = &json["route_overview"];
    assert_eq!(overview["optimization_mode"], "fastest");
    assert_eq!(overview["route_path"], "AAA → BBB → CCC");
    assert_eq!(overview["number_of_stops"], 1);
    assert_eq!(overview["crew_cost_structure"], "$470/hour (Origin-based)");
    assert!(json["detailed_cost_breakdown"]["fuel_cost_usd"].is_number());
    let segments = json["flight_segments"].as_array().expect("segments array");
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[1]["refuel_info"]["requires_refuel"], true);
}

#[test]
fn unknown_airport_suggests_closest_code() {
    prepare_command()
        .args(["route", "--from", "AAB", "--to", "CCC"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unknown airport 'AAB'. Did you mean 'AAA'?",
        ));
}

#[test]
fn unreachable_destination_reports_no_route() {
    prepare_command()
        .args(["route", "--from", "AAA", "--to", "ISL"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No route found between AAA and ISL."));
}

#[test]
fn avoiding_the_only_stop_leaves_no_route() {
    prepare_command()
        .args(["route", "--from", "AAA", "--to", "CCC", "--avoid", "bbb"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Try removing airports from --avoid."));
}

#[test]
fn short_range_aircraft_cannot_cross_the_corridor() {
    prepare_command()
        .arg("--aircraft-data")
        .arg(fixture("regional_aircraft.csv"))
        .args(["route", "--from", "AAA", "--to", "BBB", "--aircraft", "E195-E2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No route found between AAA and BBB."));
}

#[test]
fn out_of_range_safety_factor_is_rejected() {
    prepare_command()
        .args(["route", "--from", "AAA", "--to", "CCC", "--safety-factor", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("safety factor must be within (0, 1]"));
}

#[test]
fn unknown_mode_is_a_usage_error() {
    prepare_command()
        .args(["route", "--from", "AAA", "--to", "CCC", "--mode", "slowest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown optimization mode 'slowest'"));
}

#[test]
fn compare_prints_both_routes() {
    prepare_command()
        .args(["compare", "--from", "AAA", "--to", "CCC"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- CHEAPEST ROUTE ---"))
        .stdout(predicate::str::contains("--- FASTEST ROUTE ---"))
        .stdout(predicate::str::contains("Route (fastest):"));
}

#[test]
fn compare_json_has_both_sides() {
    let output = prepare_command()
        .args(["--format", "json", "compare", "--from", "AAA", "--to", "CCC"])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(json["cheapest"]["route_overview"]["optimization_mode"], "cheapest");
    assert_eq!(json["fastest"]["route_overview"]["optimization_mode"], "fastest");
}

#[test]
fn lower_safety_factor_makes_small_tank_usable() {
    let dir = tempdir().expect("create temp dir");
    let catalog = dir.path().join("ferry.csv");
    fs::write(
        &catalog,
        "name,category,max_range_km,max_fuel_capacity_kg,cruise_speed_kmh,fuel_burn_kg_per_km,\
maintenance_per_hour,depreciation_per_hour,insurance_per_hour,navigation_fee_per_km,\
ground_handling_per_stop\n\
Ferry Jet,Ferry,9000,22000,850,3.0,500,700,100,0.1,300\n",
    )
    .expect("write catalog");

    prepare_command()
        .arg("--aircraft-data")
        .arg(&catalog)
        .args(["route", "--from", "AAA", "--to", "CCC", "--aircraft", "Ferry Jet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("the tank holds 22000 kg"));

    prepare_command()
        .arg("--aircraft-data")
        .arg(&catalog)
        .args(["route", "--from", "AAA", "--to", "CCC", "--aircraft", "Ferry Jet"])
        .args(["--safety-factor", "0.75"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: AAA → BBB → CCC"));
}
