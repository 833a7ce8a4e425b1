use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use starroute_cli::commands::anchors::{handle_anchors_command, AnchorsArgs};
use starroute_cli::commands::range::{handle_range_command, RangeArgs};
use starroute_cli::commands::route::{handle_route_command, RouteArgs};
use starroute_cli::context::DataSources;
use starroute_cli::logging::{init_logging, LogFormat};

#[derive(Parser, Debug)]
#[command(author, version, about = "Plan jump routes between star systems")]
struct Cli {
    /// System catalog file (.json or .csv).
    #[arg(long, env = "STARROUTE_SYSTEMS", global = true)]
    systems: Option<PathBuf>,

    /// Anchor list file (.json).
    #[arg(long, env = "STARROUTE_ANCHORS", global = true)]
    anchors: Option<PathBuf>,

    /// Planner configuration file (.json).
    #[arg(long, env = "STARROUTE_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Log output format, written to stderr.
    #[arg(
        long,
        value_enum,
        env = "LOG_FORMAT",
        default_value_t = LogFormat::Text,
        global = true
    )]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a route between two systems.
    Route(RouteArgs),
    /// List systems within jump range of a system.
    Range(RangeArgs),
    /// List the anchors resolved against the catalog.
    Anchors(AnchorsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    let sources = DataSources {
        systems: cli.systems,
        anchors: cli.anchors,
        config: cli.config,
    };

    match &cli.command {
        Command::Route(args) => {
            let engine = sources.load_engine(args.range)?;
            handle_route_command(&engine, args)
        }
        Command::Range(args) => {
            let engine = sources.load_engine(args.range)?;
            handle_range_command(&engine, args)
        }
        Command::Anchors(args) => {
            let engine = sources.load_engine(None)?;
            handle_anchors_command(&engine, args)
        }
    }
}
