use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use flightnet_cli::commands::aircraft::handle_aircraft_command;
use flightnet_cli::commands::airports::{handle_airports_command, AirportsCommandArgs};
use flightnet_cli::commands::compare::{handle_compare_command, CompareCommandArgs};
use flightnet_cli::commands::route::{handle_route_command, RouteCommandArgs};
use flightnet_cli::commands::GlobalOptions;
use flightnet_cli::output::{print_footer, print_logo, OutputFormat};

#[derive(Parser, Debug)]
#[command(author, version, about = "Fuel-aware multi-hop flight route optimizer")]
struct Cli {
    /// Airport dataset (JSON or CSV). Falls back to FLIGHTNET_AIRPORTS, the
    /// data directory, then the built-in sample network.
    #[arg(long, global = true)]
    airports: Option<PathBuf>,

    /// Aircraft catalog CSV replacing the bundled catalog.
    #[arg(long = "aircraft-data", global = true)]
    aircraft_data: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Suppress the banner and timing footer.
    #[arg(long = "no-logo", global = true)]
    no_logo: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Optimize a route between two airports.
    Route(RouteCommandArgs),
    /// Show the cheapest and fastest routes side by side.
    Compare(CompareCommandArgs),
    /// List airports in the loaded network.
    Airports(AirportsCommandArgs),
    /// List aircraft in the catalog.
    Aircraft,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let started = Instant::now();

    let decorate = cli.format.is_human() && !cli.no_logo;
    if decorate {
        print_logo();
    }

    let options = GlobalOptions {
        airports: cli.airports,
        aircraft_data: cli.aircraft_data,
        format: cli.format,
    };

    match &cli.command {
        Command::Route(args) => handle_route_command(&options, args)?,
        Command::Compare(args) => handle_compare_command(&options, args)?,
        Command::Airports(args) => handle_airports_command(&options, args)?,
        Command::Aircraft => handle_aircraft_command(&options)?,
    }

    if decorate {
        print_footer(started.elapsed());
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
