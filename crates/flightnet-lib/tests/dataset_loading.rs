mod common;

use std::fs;

use flightnet_lib::dataset::{load_airports, load_airports_from, DatasetSource};
use flightnet_lib::{load_network, Aircraft, AircraftCatalog, CrewRegion, Error, Network};
use tempfile::tempdir;

use common::{fixtures_dir, widebody_network};

#[test]
fn json_and_csv_fixtures_describe_the_same_network() {
    let from_json = load_airports(&fixtures_dir().join("corridor_airports.json")).expect("json");
    let from_csv = load_airports(&fixtures_dir().join("corridor_airports.csv")).expect("csv");
    assert_eq!(from_json, from_csv);
    assert_eq!(from_json.len(), 4);
}

#[test]
fn per_airport_fuel_capacity_overrides_default() {
    let mut network = widebody_network(CrewRegion::Default);
    network
        .extend_airports(
            load_airports(&fixtures_dir().join("corridor_airports.csv")).expect("csv loads"),
        )
        .expect("valid airports");

    assert_eq!(network.airport("ISL").unwrap().max_fuel_capacity_kg, 20_000.0);
    assert_eq!(network.airport("AAA").unwrap().max_fuel_capacity_kg, 45_000.0);
}

#[test]
fn load_network_from_explicit_path() {
    let aircraft = AircraftCatalog::builtin()
        .expect("builtin catalog")
        .get("777-300ER")
        .cloned()
        .expect("widebody present");
    let network = load_network(
        Some(fixtures_dir().join("corridor_airports.json").as_path()),
        aircraft,
        CrewRegion::Europe.profile(),
        None,
    )
    .expect("network loads");

    assert_eq!(network.len(), 4);
    assert_eq!(network.crew().total_per_hour(), 470.0);
}

#[test]
fn builtin_source_loads_sample_network() {
    let specs = load_airports_from(&DatasetSource::Builtin).expect("bundled data");
    let mut network = widebody_network(CrewRegion::India);
    network.extend_airports(specs).expect("valid");
    assert_eq!(network.len(), 45);
    assert!(network.contains("BUD"));
}

#[test]
fn invalid_airport_in_file_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(
        &path,
        r#"[{"id":"BAD","name":"Bad","lat":123.0,"lon":0.0,"fuel_price":1,"landing_fee":1,"country":"X"}]"#,
    )
    .unwrap();

    let specs = load_airports(&path).expect("syntactically valid");
    let mut network = widebody_network(CrewRegion::Default);
    let err = network.extend_airports(specs).unwrap_err();
    assert!(matches!(err, Error::InvalidAirport { ref code, .. } if code == "BAD"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = load_airports(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn aircraft_catalog_from_fixture() {
    let catalog = AircraftCatalog::from_path(&fixtures_dir().join("regional_aircraft.csv"))
        .expect("fixture catalog loads");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.names(), vec!["ATR 72-600", "E195-E2"]);
    assert!(catalog.source_path().is_some());

    let jet = catalog.get("e195-e2").expect("case-insensitive lookup").clone();
    let network = Network::new(jet, CrewRegion::Us.profile()).expect("regional jet is valid");
    assert!((network.safe_range_km() - 4_320.0).abs() < 1e-9);
}

#[test]
fn unknown_crew_region_is_rejected() {
    let err = "antarctica".parse::<CrewRegion>().unwrap_err();
    assert!(matches!(err, Error::UnknownCrewRegion { .. }));
    assert_eq!("Middle-East".parse::<CrewRegion>().unwrap(), CrewRegion::MiddleEast);
}

#[test]
fn load_network_applies_safety_factor_before_tank_check() {
    let mut aircraft = Aircraft::widebody_long_range();
    aircraft.max_range_km = 5_000.0;
    aircraft.max_fuel_capacity_kg = 10_000.0;
    aircraft.costs.fuel_burn_kg_per_km = 2.5;
    let airports = fixtures_dir().join("corridor_airports.json");

    let err = load_network(
        Some(airports.as_path()),
        aircraft.clone(),
        CrewRegion::Us.profile(),
        None,
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidAircraft { .. }));

    let network = load_network(
        Some(airports.as_path()),
        aircraft,
        CrewRegion::Us.profile(),
        Some(0.7),
    )
    .expect("lower safety factor fits the tank");
    assert_eq!(network.len(), 4);
    assert!((network.safe_range_km() - 3_500.0).abs() < 1e-9);
}
