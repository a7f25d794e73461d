//! Airport network model for one optimization session.
//!
//! A [`Network`] owns the airport reference data together with the aircraft
//! and crew cost profile that every leg is priced against. It is built once,
//! validated up front, and then shared read-only by any number of searches.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aircraft::{Aircraft, CrewCostProfile, DEFAULT_SAFETY_FACTOR};
use crate::error::{Error, Result};
use crate::spatial::Coordinates;

/// Airport attributes as supplied by callers and data files.
///
/// `max_fuel_capacity_kg` is optional; the network fills in the aircraft's
/// tank capacity when it is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportSpec {
    #[serde(alias = "id")]
    pub code: String,
    pub name: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(alias = "fuel_price")]
    pub fuel_price_per_kg: f64,
    pub landing_fee: f64,
    #[serde(
        default,
        alias = "max_fuel_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_fuel_capacity_kg: Option<f64>,
}

impl AirportSpec {
    /// Convenience constructor for the common case without a local fuel cap.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        country: impl Into<String>,
        lat: f64,
        lon: f64,
        fuel_price_per_kg: f64,
        landing_fee: f64,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            country: country.into(),
            lat,
            lon,
            fuel_price_per_kg,
            landing_fee,
            max_fuel_capacity_kg: None,
        }
    }

    pub fn with_max_fuel_capacity(mut self, kg: f64) -> Self {
        self.max_fuel_capacity_kg = Some(kg);
        self
    }
}

/// Airport held by a [`Network`]. Immutable once inserted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub country: String,
    pub coordinates: Coordinates,
    pub fuel_price_per_kg: f64,
    pub landing_fee: f64,
    pub max_fuel_capacity_kg: f64,
}

impl Airport {
    fn from_spec(spec: AirportSpec, default_capacity: f64) -> Result<Self> {
        let code = normalize_code(&spec.code);
        if code.is_empty() {
            return Err(Error::InvalidAirport {
                code: spec.code,
                message: "airport code must not be empty".to_string(),
            });
        }

        let coordinates =
            Coordinates::new(spec.lat, spec.lon).map_err(|err| Error::InvalidAirport {
                code: code.clone(),
                message: err.to_string(),
            })?;

        let max_fuel_capacity_kg = spec.max_fuel_capacity_kg.unwrap_or(default_capacity);
        let fields = [
            (spec.fuel_price_per_kg, "fuel_price_per_kg"),
            (spec.landing_fee, "landing_fee"),
            (max_fuel_capacity_kg, "max_fuel_capacity_kg"),
        ];
        for (value, field) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidAirport {
                    code,
                    message: format!("{field} must be a finite non-negative number"),
                });
            }
        }

        Ok(Self {
            code,
            name: spec.name.trim().to_string(),
            country: spec.country.trim().to_string(),
            coordinates,
            fuel_price_per_kg: spec.fuel_price_per_kg,
            landing_fee: spec.landing_fee,
            max_fuel_capacity_kg,
        })
    }
}

/// Capability deciding whether an airport may be used at all.
///
/// Installed on a [`Network`] so that [`Network::can_fly_direct`] refuses any
/// leg touching an excluded airport.
pub trait AirspaceFilter: Send + Sync + fmt::Debug {
    fn is_excluded(&self, code: &str) -> bool;
}

/// Filter that admits every airport.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unrestricted;

impl AirspaceFilter for Unrestricted {
    fn is_excluded(&self, _code: &str) -> bool {
        false
    }
}

/// Set of airport codes closed to traffic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoFlyZones {
    codes: BTreeSet<String>,
}

impl NoFlyZones {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            codes: codes
                .into_iter()
                .map(|code| normalize_code(code.as_ref()))
                .filter(|code| !code.is_empty())
                .collect(),
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code) || self.codes.contains(&normalize_code(code))
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl AirspaceFilter for NoFlyZones {
    fn is_excluded(&self, code: &str) -> bool {
        self.contains(code)
    }
}

/// Airports plus the aircraft and crew profile for one optimization session.
#[derive(Debug, Clone)]
pub struct Network {
    airports: BTreeMap<String, Airport>,
    aircraft: Aircraft,
    crew: CrewCostProfile,
    safety_factor: f64,
    airspace: Arc<dyn AirspaceFilter>,
}

impl Network {
    /// Create an empty network with the default 0.9 safety factor, rejecting
    /// aircraft or crew parameters that would lead to division by zero or
    /// negative costs.
    pub fn new(aircraft: Aircraft, crew: CrewCostProfile) -> Result<Self> {
        Self::with_config(aircraft, crew, DEFAULT_SAFETY_FACTOR)
    }

    /// Create an empty network with an explicit safety factor in (0, 1].
    ///
    /// The tank check runs against this factor, so an aircraft that only
    /// covers a shorter safe range is accepted when the factor is lowered.
    pub fn with_config(
        aircraft: Aircraft,
        crew: CrewCostProfile,
        safety_factor: f64,
    ) -> Result<Self> {
        aircraft.validate()?;
        crew.validate()?;
        validate_safety_factor(safety_factor)?;

        let network = Self {
            airports: BTreeMap::new(),
            aircraft,
            crew,
            safety_factor,
            airspace: Arc::new(Unrestricted),
        };
        network.validate_tank_covers_safe_range()?;
        Ok(network)
    }

    /// Override the reserve-fuel safety factor (default 0.9).
    pub fn with_safety_factor(mut self, safety_factor: f64) -> Result<Self> {
        validate_safety_factor(safety_factor)?;
        self.safety_factor = safety_factor;
        self.validate_tank_covers_safe_range()?;
        Ok(self)
    }

    /// Install the filter consulted by [`Network::can_fly_direct`].
    pub fn with_airspace_filter<F>(mut self, filter: F) -> Self
    where
        F: AirspaceFilter + 'static,
    {
        self.airspace = Arc::new(filter);
        self
    }

    // A leg at the edge of the safe range must be flyable on one tank, or the
    // fuel planner would be forced to depart short of fuel.
    fn validate_tank_covers_safe_range(&self) -> Result<()> {
        let required = self.aircraft.fuel_required_kg(self.safe_range_km());
        if required > self.aircraft.max_fuel_capacity_kg {
            return Err(Error::InvalidAircraft {
                message: format!(
                    "a {:.0} km leg needs {:.0} kg of fuel but the tank holds {:.0} kg",
                    self.safe_range_km(),
                    required,
                    self.aircraft.max_fuel_capacity_kg
                ),
            });
        }
        Ok(())
    }

    /// Insert or replace an airport by code.
    pub fn add_airport(&mut self, spec: AirportSpec) -> Result<()> {
        let airport = Airport::from_spec(spec, self.aircraft.max_fuel_capacity_kg)?;
        if self.airports.contains_key(&airport.code) {
            debug!("replacing airport {}", airport.code);
        }
        self.airports.insert(airport.code.clone(), airport);
        Ok(())
    }

    /// Insert every airport from `specs`, stopping at the first invalid one.
    pub fn extend_airports<I>(&mut self, specs: I) -> Result<()>
    where
        I: IntoIterator<Item = AirportSpec>,
    {
        for spec in specs {
            self.add_airport(spec)?;
        }
        Ok(())
    }

    /// Lookup an airport by code. Codes are matched case-insensitively.
    pub fn airport(&self, code: &str) -> Option<&Airport> {
        self.airports
            .get(code)
            .or_else(|| self.airports.get(&normalize_code(code)))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.airport(code).is_some()
    }

    /// Airports ordered by code.
    pub fn airports(&self) -> impl Iterator<Item = &Airport> {
        self.airports.values()
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    pub fn aircraft(&self) -> &Aircraft {
        &self.aircraft
    }

    pub fn crew(&self) -> &CrewCostProfile {
        &self.crew
    }

    pub fn safety_factor(&self) -> f64 {
        self.safety_factor
    }

    /// Longest leg the aircraft may fly: `safety_factor * max_range`.
    pub fn safe_range_km(&self) -> f64 {
        self.safety_factor * self.aircraft.max_range_km
    }

    pub fn is_excluded(&self, code: &str) -> bool {
        self.airspace.is_excluded(code)
    }

    /// Great-circle distance between two airports; `+inf` when either code is unknown.
    pub fn distance(&self, from: &str, to: &str) -> f64 {
        match (self.airport(from), self.airport(to)) {
            (Some(a), Some(b)) => a.coordinates.distance_to(&b.coordinates),
            _ => f64::INFINITY,
        }
    }

    /// Whether a single leg between the two airports is permitted: within safe
    /// range and with neither endpoint excluded by the airspace filter.
    pub fn can_fly_direct(&self, from: &str, to: &str) -> bool {
        if self.airspace.is_excluded(from) || self.airspace.is_excluded(to) {
            return false;
        }
        self.distance(from, to) <= self.safe_range_km()
    }

    /// Resolve a code, producing an [`Error::UnknownAirport`] with suggestions on failure.
    pub fn resolve(&self, code: &str) -> Result<&Airport> {
        self.airport(code).ok_or_else(|| Error::UnknownAirport {
            code: code.to_string(),
            suggestions: self.fuzzy_matches(code, 3),
        })
    }

    /// Closest airport codes to `query`, compared against both codes and names.
    pub fn fuzzy_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(f64, &str)> = self
            .airports
            .values()
            .map(|airport| {
                let by_code = strsim::jaro_winkler(&needle, &airport.code.to_lowercase());
                let by_name = strsim::jaro_winkler(&needle, &airport.name.to_lowercase());
                (by_code.max(by_name), airport.code.as_str())
            })
            .filter(|(score, _)| *score >= FUZZY_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, code)| code.to_string())
            .collect()
    }
}

fn validate_safety_factor(value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 || value > 1.0 {
        return Err(Error::InvalidSafetyFactor { value });
    }
    Ok(())
}

/// Minimum Jaro-Winkler similarity for a suggestion.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Canonical form of an airport code.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
