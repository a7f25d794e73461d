//! Aircraft-related constants used across range, fuel and time calculations.

/// Fraction of the aircraft's maximum range usable for a single leg.
///
/// The remaining 10% is held back as reserve fuel margin.
pub const DEFAULT_SAFETY_FACTOR: f64 = 0.9;

/// Fixed taxi, takeoff, approach and landing overhead added to every leg (hours).
pub const GROUND_OPERATIONS_HOURS: f64 = 0.5;
