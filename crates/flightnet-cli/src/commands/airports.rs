//! Airports command: list the loaded airport network.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use flightnet_lib::{load_network, Aircraft, Airport, CrewCostProfile};

use crate::commands::GlobalOptions;
use crate::output::{render_json, OutputFormat};
use crate::terminal::ColorPalette;

#[derive(Args, Debug, Clone, Default)]
pub struct AirportsCommandArgs {
    /// Only list airports in this country (case-insensitive).
    #[arg(long)]
    pub country: Option<String>,
}

#[derive(Debug, Serialize)]
struct AirportRow<'a> {
    code: &'a str,
    name: &'a str,
    country: &'a str,
    lat: f64,
    lon: f64,
    fuel_price_per_kg: f64,
    landing_fee: f64,
}

impl<'a> From<&'a Airport> for AirportRow<'a> {
    fn from(airport: &'a Airport) -> Self {
        Self {
            code: &airport.code,
            name: &airport.name,
            country: &airport.country,
            lat: airport.coordinates.lat,
            lon: airport.coordinates.lon,
            fuel_price_per_kg: airport.fuel_price_per_kg,
            landing_fee: airport.landing_fee,
        }
    }
}

pub fn handle_airports_command(options: &GlobalOptions, args: &AirportsCommandArgs) -> Result<()> {
    // Listing only needs the reference data, so any valid aircraft will do.
    let network = load_network(
        options.airports.as_deref(),
        Aircraft::widebody_long_range(),
        CrewCostProfile::default(),
        None,
    )
    .context("failed to load airport network")?;

    let rows: Vec<AirportRow<'_>> = network
        .airports()
        .filter(|airport| match &args.country {
            Some(country) => airport.country.eq_ignore_ascii_case(country.trim()),
            None => true,
        })
        .map(AirportRow::from)
        .collect();

    if options.format == OutputFormat::Json {
        render_json(&rows)?;
        return Ok(());
    }

    let palette = ColorPalette::detect();
    println!(
        "{}{:<5} {:<40} {:<22} {:>9} {:>11}{}",
        palette.white_bold, "CODE", "NAME", "COUNTRY", "FUEL/KG", "LANDING", palette.reset
    );
    for row in &rows {
        println!(
            "{:<5} {:<40} {:<22} {:>9.2} {:>11.0}",
            row.code, row.name, row.country, row.fuel_price_per_kg, row.landing_fee
        );
    }
    println!("{}{} airports{}", palette.gray, rows.len(), palette.reset);
    Ok(())
}
