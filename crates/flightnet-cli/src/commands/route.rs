//! Route command handler for optimizing a journey between two airports.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use flightnet_lib::{
    plan_route, BalancedWeights, Error as RouteError, OptimizationMode, RouteConstraints,
    RouteReport, RouteRequest,
};

use crate::commands::{load_session_network, split_codes, FlightProfileArgs, GlobalOptions};
use crate::output::render_route;

/// Arguments for the route command.
#[derive(Args, Debug, Clone)]
pub struct RouteCommandArgs {
    /// Origin airport code.
    #[arg(long = "from")]
    pub from: String,

    /// Destination airport code.
    #[arg(long = "to")]
    pub to: String,

    /// Optimization objective (cheapest, fastest or balanced).
    #[arg(long, default_value = "cheapest", value_parser = parse_mode)]
    pub mode: OptimizationMode,

    /// Airports to close for this request. Repeat or pass a comma-separated list.
    #[arg(long = "avoid", value_delimiter = ',')]
    pub avoid: Vec<String>,

    /// Cost weight for balanced mode.
    #[arg(long = "cost-weight", requires = "time_weight")]
    pub cost_weight: Option<f64>,

    /// Time weight for balanced mode.
    #[arg(long = "time-weight", requires = "cost_weight")]
    pub time_weight: Option<f64>,

    #[command(flatten)]
    pub profile: FlightProfileArgs,
}

pub(crate) fn parse_mode(value: &str) -> std::result::Result<OptimizationMode, String> {
    value.parse::<OptimizationMode>().map_err(|err| err.to_string())
}

impl RouteCommandArgs {
    /// Convert CLI args to a library [`RouteRequest`].
    pub fn to_request(&self) -> Result<RouteRequest> {
        let mut request = RouteRequest::new(&self.from, &self.to, self.mode)
            .with_avoided(split_codes(&self.avoid));

        if let (Some(cost), Some(time)) = (self.cost_weight, self.time_weight) {
            let defaults = BalancedWeights::default();
            let weights = BalancedWeights::new(cost, time, defaults.cost_normalization)
                .context("invalid balanced weights")?;
            request = request.with_weights(weights);
        }
        Ok(request)
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(options: &GlobalOptions, args: &RouteCommandArgs) -> Result<()> {
    let network = load_session_network(options, &args.profile)?;
    let request = args.to_request()?;

    let route = plan_route(&network, &request)
        .map_err(|err| handle_route_failure(&request, err))?;
    info!(
        mode = %route.mode,
        stops = route.stops(),
        total_cost = route.totals.total_cost,
        "route planned"
    );

    let report = RouteReport::from_route(&network, &route);
    render_route(&report, options.format)?;
    Ok(())
}

/// Translate library errors into friendlier CLI messages.
pub(crate) fn handle_route_failure(request: &RouteRequest, err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownAirport { code, suggestions } => {
            anyhow::anyhow!(format_unknown_airport_message(&code, &suggestions))
        }
        RouteError::RouteNotFound { start, goal } => anyhow::anyhow!(
            format_route_not_found_message(&start, &goal, &request.constraints)
        ),
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_airport_message(code: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown airport '{}'.", code);
    match suggestions {
        [] => {}
        [only] => message.push_str(&format!(" Did you mean '{only}'?")),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {}?", joined));
        }
    }
    message
}

fn format_route_not_found_message(
    start: &str,
    goal: &str,
    constraints: &RouteConstraints,
) -> String {
    let mut message = format!("No route found between {} and {}.", start, goal);
    if constraints.avoid_airports.is_empty() {
        message.push_str(
            " Try an aircraft with more range (--aircraft) or a higher --safety-factor.",
        );
    } else {
        message.push_str(" Try removing airports from --avoid.");
    }
    message
}
