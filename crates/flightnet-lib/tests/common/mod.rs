//! Common test utilities and fixture helpers.
//!
//! Shared networks for the integration tests: the small equatorial
//! "corridor" fixture and the bundled sample network.

use std::path::PathBuf;

use flightnet_lib::dataset::load_airports;
use flightnet_lib::{builtin_network_airports, Aircraft, CrewRegion, Network};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Empty network for the bundled widebody and the given crew tier.
#[allow(dead_code)]
pub fn widebody_network(region: CrewRegion) -> Network {
    Network::new(Aircraft::widebody_long_range(), region.profile()).expect("valid widebody profile")
}

/// AAA, BBB and CCC on the equator 55° apart, plus ISL beyond range of all of
/// them. AAA-CCC (~12231 km) exceeds the widebody's 11700 km safe range.
#[allow(dead_code)]
pub fn corridor_network() -> Network {
    let specs = load_airports(&fixtures_dir().join("corridor_airports.json"))
        .expect("corridor fixture loads");
    let mut network = widebody_network(CrewRegion::Default);
    network.extend_airports(specs).expect("corridor fixture is valid");
    network
}

/// The bundled sample network with India-based crew.
#[allow(dead_code)]
pub fn sample_network() -> Network {
    let mut network = widebody_network(CrewRegion::India);
    network
        .extend_airports(builtin_network_airports().expect("bundled airports parse"))
        .expect("bundled airports are valid");
    network
}
