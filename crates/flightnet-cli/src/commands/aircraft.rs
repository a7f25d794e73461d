//! Aircraft command: list the aircraft catalog.

use anyhow::Result;

use crate::commands::{load_aircraft_catalog, GlobalOptions};
use crate::output::{render_json, OutputFormat};
use crate::terminal::ColorPalette;

pub fn handle_aircraft_command(options: &GlobalOptions) -> Result<()> {
    let catalog = load_aircraft_catalog(options.aircraft_data.as_deref())?;
    let aircraft = catalog.aircraft_sorted();

    if options.format == OutputFormat::Json {
        render_json(&aircraft)?;
        return Ok(());
    }

    let palette = ColorPalette::detect();
    println!(
        "{}{:<14} {:<22} {:>9} {:>10} {:>8} {:>9}{}",
        palette.white_bold,
        "NAME",
        "CATEGORY",
        "RANGE_KM",
        "TANK_KG",
        "KM/H",
        "BURN/KM",
        palette.reset
    );
    for plane in aircraft {
        println!(
            "{:<14} {:<22} {:>9.0} {:>10.0} {:>8.0} {:>9.2}",
            plane.name,
            plane.category,
            plane.max_range_km,
            plane.max_fuel_capacity_kg,
            plane.cruise_speed_kmh,
            plane.costs.fuel_burn_kg_per_km
        );
    }
    Ok(())
}
