//! Compare command: cheapest and fastest routes side by side.

use anyhow::Result;
use clap::Args;
use tracing::info;

use flightnet_lib::{plan_comparison, ComparisonReport, RouteConstraints, RouteRequest};

use crate::commands::route::handle_route_failure;
use crate::commands::{load_session_network, split_codes, FlightProfileArgs, GlobalOptions};
use crate::output::render_comparison;

#[derive(Args, Debug, Clone)]
pub struct CompareCommandArgs {
    /// Origin airport code.
    #[arg(long = "from")]
    pub from: String,

    /// Destination airport code.
    #[arg(long = "to")]
    pub to: String,

    /// Airports to close for both searches.
    #[arg(long = "avoid", value_delimiter = ',')]
    pub avoid: Vec<String>,

    #[command(flatten)]
    pub profile: FlightProfileArgs,
}

pub fn handle_compare_command(options: &GlobalOptions, args: &CompareCommandArgs) -> Result<()> {
    let network = load_session_network(options, &args.profile)?;
    let constraints = RouteConstraints {
        avoid_airports: split_codes(&args.avoid),
    };

    let comparison = plan_comparison(&network, &args.from, &args.to, &constraints).map_err(|err| {
        let request = RouteRequest::cheapest(&args.from, &args.to)
            .with_avoided(constraints.avoid_airports.iter().cloned());
        handle_route_failure(&request, err)
    })?;
    info!(
        cheapest_cost = comparison.cheapest.totals.total_cost,
        fastest_hours = comparison.fastest.totals.block_time_hours,
        "comparison complete"
    );

    let report = ComparisonReport::from_comparison(&network, &comparison);
    render_comparison(&report, options.format)?;
    Ok(())
}
