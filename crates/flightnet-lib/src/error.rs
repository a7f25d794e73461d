use thiserror::Error;

/// Convenient result alias for the FlightNet library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for airport data")]
    ProjectDirsUnavailable,

    /// Raised when an airport code could not be found in the network.
    #[error("unknown airport code: {code}{}", format_suggestions(.suggestions))]
    UnknownAirport {
        code: String,
        suggestions: Vec<String>,
    },

    /// Raised when a crew region label does not name a supported tier.
    #[error("unknown crew region '{label}'; expected one of: india, us, europe, middle_east, default")]
    UnknownCrewRegion { label: String },

    /// Raised when an optimization mode label is not recognised.
    #[error("unknown optimization mode '{label}'; expected cheapest, fastest or balanced")]
    UnknownOptimizationMode { label: String },

    /// Raised when no route could be found between two airports.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a computed route lacks any airports.
    #[error("route was empty")]
    EmptyRoute,

    /// Raised when aircraft parameters would break the cost model.
    #[error("invalid aircraft: {message}")]
    InvalidAircraft { message: String },

    /// Raised when an airport's attributes fail validation.
    #[error("invalid airport {code}: {message}")]
    InvalidAirport { code: String, message: String },

    /// Raised when crew hourly rates fail validation.
    #[error("invalid crew cost profile: {message}")]
    InvalidCrewProfile { message: String },

    /// Raised when balanced-mode weights would produce a meaningless metric.
    #[error("invalid balanced weights: {message}")]
    InvalidBalancedWeights { message: String },

    /// Raised when the range safety factor lies outside (0, 1].
    #[error("safety factor must be within (0, 1], got {value}")]
    InvalidSafetyFactor { value: f64 },

    /// Raised when aircraft catalog data fails validation.
    #[error("invalid aircraft data: {message}")]
    AircraftDataValidation { message: String },

    /// Raised when duplicate aircraft names are encountered during catalog load.
    #[error("duplicate aircraft name encountered: {name}")]
    DuplicateAircraftName { name: String },

    /// Raised when airport reference data cannot be parsed.
    #[error("invalid airport data: {message}")]
    AirportDataValidation { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_airport_lists_single_suggestion() {
        let err = Error::UnknownAirport {
            code: "DXR".to_string(),
            suggestions: vec!["DXB".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown airport code: DXR. Did you mean 'DXB'?"
        );
    }

    #[test]
    fn unknown_airport_without_suggestions_is_plain() {
        let err = Error::UnknownAirport {
            code: "ZZZ".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown airport code: ZZZ");
    }
}
