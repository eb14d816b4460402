use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use waypoint_core::geopoint::GeoPoint;

use crate::route::RouteArgs;

mod info;
mod interactive;
mod nearest;
mod parsers;
mod route;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Computes the shortest route between two locations
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    /// Prints the nodes and edges of a map
    Info {
        #[arg(short, long, env = "WAYPOINT_MAP")]
        map: PathBuf,
    },
    /// Finds the node closest to "lat,lng"
    Nearest {
        #[arg(short, long, env = "WAYPOINT_MAP")]
        map: PathBuf,

        #[arg(value_parser = parsers::parse_coordinates, allow_hyphen_values = true)]
        coordinates: GeoPoint,
    },
    /// Asks for a map, a start and a destination on the terminal
    #[command(visible_alias = "i")]
    Interactive {
        #[arg(required = true)]
        maps: Vec<PathBuf>,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Route { args } => route::run(args)?,
        Commands::Info { map } => info::run(&map)?,
        Commands::Nearest { map, coordinates } => nearest::run(&map, coordinates)?,
        Commands::Interactive { maps } => interactive::run(&maps)?,
    }

    Ok(())
}
