//! Aircraft catalog loading and management.
//!
//! This module handles loading aircraft types from CSV files and provides
//! case-insensitive catalog lookup.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::error::{Error, Result};

use super::attributes::{Aircraft, AircraftCostProfile};

/// Catalog shipped with the library.
const BUILTIN_CATALOG: &str = include_str!("../../data/aircraft.csv");

/// Flat CSV row; header aliases accept the shorter column names used by
/// hand-written catalogs.
#[derive(Debug, Deserialize)]
struct AircraftRecord {
    #[serde(alias = "aircraft", alias = "model")]
    name: String,
    #[serde(default)]
    category: String,
    #[serde(alias = "max_range", alias = "range_km")]
    max_range_km: f64,
    #[serde(alias = "max_fuel_capacity", alias = "fuel_capacity_kg")]
    max_fuel_capacity_kg: f64,
    #[serde(alias = "cruise_speed", alias = "speed_kmh")]
    cruise_speed_kmh: f64,
    #[serde(alias = "fuel_consumption_per_km", alias = "burn_kg_per_km")]
    fuel_burn_kg_per_km: f64,
    #[serde(alias = "maintenance_cost_per_hour")]
    maintenance_per_hour: f64,
    #[serde(alias = "depreciation_cost_per_hour")]
    depreciation_per_hour: f64,
    #[serde(alias = "insurance_cost_per_hour")]
    insurance_per_hour: f64,
    #[serde(alias = "navigation_fees_per_km")]
    navigation_fee_per_km: f64,
    #[serde(alias = "ground_handling_base_cost")]
    ground_handling_per_stop: f64,
}

impl From<AircraftRecord> for Aircraft {
    fn from(record: AircraftRecord) -> Self {
        Aircraft {
            name: record.name.trim().to_string(),
            category: record.category.trim().to_string(),
            max_range_km: record.max_range_km,
            max_fuel_capacity_kg: record.max_fuel_capacity_kg,
            cruise_speed_kmh: record.cruise_speed_kmh,
            costs: AircraftCostProfile {
                fuel_burn_kg_per_km: record.fuel_burn_kg_per_km,
                maintenance_per_hour: record.maintenance_per_hour,
                depreciation_per_hour: record.depreciation_per_hour,
                insurance_per_hour: record.insurance_per_hour,
                navigation_fee_per_km: record.navigation_fee_per_km,
                ground_handling_per_stop: record.ground_handling_per_stop,
            },
        }
    }
}

/// Collection of aircraft definitions loaded from a CSV file.
#[derive(Debug, Clone, Default)]
pub struct AircraftCatalog {
    aircraft: HashMap<String, Aircraft>,
    source: Option<PathBuf>,
}

impl AircraftCatalog {
    /// Catalog bundled with the library.
    pub fn builtin() -> Result<Self> {
        Self::from_reader(BUILTIN_CATALOG.as_bytes())
    }

    /// Load an aircraft catalog from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        Ok(catalog)
    }

    /// Load an aircraft catalog from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let mut aircraft = HashMap::new();

        for (row, record) in csv_reader.deserialize::<AircraftRecord>().enumerate() {
            let record = record.map_err(|err| Error::AircraftDataValidation {
                // Header occupies line 1.
                message: format!("row {}: {}", row + 2, err),
            })?;
            let entry: Aircraft = record.into();
            entry.validate().map_err(|err| Error::AircraftDataValidation {
                message: format!("aircraft '{}': {}", entry.name, err),
            })?;

            let key = normalize_name(&entry.name);
            if aircraft.contains_key(&key) {
                return Err(Error::DuplicateAircraftName { name: key });
            }
            aircraft.insert(key, entry);
        }

        Ok(Self {
            aircraft,
            source: None,
        })
    }

    /// Get an aircraft by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Aircraft> {
        self.aircraft.get(&normalize_name(name))
    }

    /// Get a sorted list of all aircraft names.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.aircraft.values().map(|a| a.name.clone()).collect();
        names.sort();
        names
    }

    /// Get all aircraft sorted by name.
    pub fn aircraft_sorted(&self) -> Vec<&Aircraft> {
        let mut aircraft: Vec<&Aircraft> = self.aircraft.values().collect();
        aircraft.sort_by(|a, b| a.name.cmp(&b.name));
        aircraft
    }

    pub fn len(&self) -> usize {
        self.aircraft.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }

    /// Get the source path if the catalog was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Normalize an aircraft name for case-insensitive lookup.
fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
