// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs dispatches to these
// handlers, keeping the entry point focused on parsing and coordination.

pub mod aircraft;
pub mod airports;
pub mod compare;
pub mod route;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use flightnet_lib::{load_network, AircraftCatalog, CrewRegion, Network};

use crate::output::OutputFormat;

/// Options shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Airport dataset override (`--airports`).
    pub airports: Option<PathBuf>,
    /// Aircraft catalog override (`--aircraft-data`).
    pub aircraft_data: Option<PathBuf>,
    pub format: OutputFormat,
}

/// Aircraft and crew selection for commands that price routes.
#[derive(Args, Debug, Clone)]
pub struct FlightProfileArgs {
    /// Aircraft name from the catalog (case-insensitive).
    #[arg(long, default_value = "777-300ER")]
    pub aircraft: String,

    /// Crew wage tier applied for the whole journey
    /// (india, us, europe, middle_east, default).
    #[arg(long = "crew-region", default_value = "india", value_parser = parse_crew_region)]
    pub crew_region: CrewRegion,

    /// Fraction of maximum range usable per leg, in (0, 1].
    #[arg(long = "safety-factor")]
    pub safety_factor: Option<f64>,
}

fn parse_crew_region(value: &str) -> std::result::Result<CrewRegion, String> {
    value.parse::<CrewRegion>().map_err(|err| err.to_string())
}

/// Load the aircraft catalog from an explicit path or the bundled data.
pub fn load_aircraft_catalog(path: Option<&Path>) -> Result<AircraftCatalog> {
    match path {
        Some(path) => AircraftCatalog::from_path(path)
            .with_context(|| format!("failed to load aircraft data from {}", path.display())),
        None => AircraftCatalog::builtin().context("failed to load bundled aircraft catalog"),
    }
}

/// Build the network for one command invocation.
pub fn load_session_network(
    options: &GlobalOptions,
    profile: &FlightProfileArgs,
) -> Result<Network> {
    let catalog = load_aircraft_catalog(options.aircraft_data.as_deref())?;
    let aircraft = catalog.get(&profile.aircraft).cloned().ok_or_else(|| {
        anyhow::anyhow!(
            "aircraft '{}' not found in catalog; available: {}",
            profile.aircraft,
            catalog.names().join(", ")
        )
    })?;
    debug!(aircraft = %aircraft.name, crew_region = %profile.crew_region, "building network");

    load_network(
        options.airports.as_deref(),
        aircraft,
        profile.crew_region.profile(),
        profile.safety_factor,
    )
    .context("failed to load airport network")
}

/// Split repeatable, comma-separated `--avoid` values into codes.
pub fn split_codes(values: &[String]) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}
