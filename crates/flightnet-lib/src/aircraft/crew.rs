//! Crew cost profiles and the regional wage tiers they are derived from.
//!
//! A journey is priced at the origin's crew rate for every leg. Crew are not
//! re-priced when the aircraft crosses into another wage region.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Supported regional wage tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CrewRegion {
    India,
    Us,
    Europe,
    MiddleEast,
    /// Moderate rates used when the caller does not pick a region.
    #[default]
    Default,
}

impl CrewRegion {
    /// All tiers in display order.
    pub const ALL: [CrewRegion; 5] = [
        CrewRegion::India,
        CrewRegion::Us,
        CrewRegion::Europe,
        CrewRegion::MiddleEast,
        CrewRegion::Default,
    ];

    /// Hourly crew rates for this tier.
    pub fn profile(self) -> CrewCostProfile {
        let (pilot, cabin, ground) = match self {
            CrewRegion::India => (120.0, 45.0, 25.0),
            CrewRegion::Us => (380.0, 95.0, 75.0),
            CrewRegion::Europe => (320.0, 85.0, 65.0),
            CrewRegion::MiddleEast => (250.0, 70.0, 45.0),
            CrewRegion::Default => (200.0, 60.0, 40.0),
        };
        CrewCostProfile {
            pilot_per_hour: pilot,
            cabin_crew_per_hour: cabin,
            ground_crew_per_hour: ground,
        }
    }
}

impl fmt::Display for CrewRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            CrewRegion::India => "india",
            CrewRegion::Us => "us",
            CrewRegion::Europe => "europe",
            CrewRegion::MiddleEast => "middle_east",
            CrewRegion::Default => "default",
        };
        f.write_str(value)
    }
}

impl FromStr for CrewRegion {
    type Err = Error;

    /// Parse a region label. Matching ignores case and treats `-` like `_`,
    /// but unknown labels are rejected rather than mapped to the default tier.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "india" => Ok(CrewRegion::India),
            "us" | "usa" => Ok(CrewRegion::Us),
            "europe" => Ok(CrewRegion::Europe),
            "middle_east" => Ok(CrewRegion::MiddleEast),
            "default" => Ok(CrewRegion::Default),
            _ => Err(Error::UnknownCrewRegion {
                label: s.to_string(),
            }),
        }
    }
}

/// Hourly crew costs, fixed at the origin's rate for an entire journey.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrewCostProfile {
    /// Captain and first officer.
    pub pilot_per_hour: f64,
    pub cabin_crew_per_hour: f64,
    pub ground_crew_per_hour: f64,
}

impl CrewCostProfile {
    pub fn for_region(region: CrewRegion) -> Self {
        region.profile()
    }

    /// Combined hourly rate charged against block time.
    pub fn total_per_hour(&self) -> f64 {
        self.pilot_per_hour + self.cabin_crew_per_hour + self.ground_crew_per_hour
    }

    /// Human-readable rate label, e.g. `$190/hour (Origin-based)`.
    pub fn label(&self) -> String {
        format!("${:.0}/hour (Origin-based)", self.total_per_hour())
    }

    pub fn validate(&self) -> Result<()> {
        let rates = [
            (self.pilot_per_hour, "pilot_per_hour"),
            (self.cabin_crew_per_hour, "cabin_crew_per_hour"),
            (self.ground_crew_per_hour, "ground_crew_per_hour"),
        ];
        for (value, field) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidCrewProfile {
                    message: format!("{field} must be a finite non-negative number"),
                });
            }
        }
        Ok(())
    }
}

impl Default for CrewCostProfile {
    fn default() -> Self {
        CrewRegion::Default.profile()
    }
}
