//! Route command handler for planning a path between two systems.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use starroute_lib::{Error, Route, RouteEngine};

use crate::commands::{describe_error, format_route_not_found_message};
use crate::output::{emit, OutputFormat};

/// Arguments for the route command.
#[derive(Debug, Clone, Args)]
pub struct RouteArgs {
    /// Starting system name.
    #[arg(long = "from")]
    pub from: String,
    /// Destination system name.
    #[arg(long = "to")]
    pub to: String,
    /// Maximum jump distance in light-years, overriding the configuration.
    #[arg(long)]
    pub range: Option<f64>,
    /// Skip anchor relaxation and return the plain shortest route.
    #[arg(long)]
    pub direct: bool,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Write the output to a file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Plan the requested route and print or save it.
pub fn handle_route_command(engine: &RouteEngine, args: &RouteArgs) -> Result<()> {
    let route = plan(engine, args)?;
    info!(
        jumps = route.jumps,
        total_distance = route.total_distance,
        waypoint = route.waypoint.as_deref().unwrap_or("-"),
        "route planned"
    );

    let rendered = args.format.render_route(&route)?;
    emit(&rendered, args.output.as_deref())
}

fn plan(engine: &RouteEngine, args: &RouteArgs) -> Result<Route> {
    require_route(engine, args).map_err(|err| match err {
        Error::RouteNotFound {
            start,
            goal,
            max_jump_range,
        } => anyhow::anyhow!(format_route_not_found_message(
            &start,
            &goal,
            max_jump_range,
            args.direct,
        )),
        other => describe_error(other),
    })
}

/// Plan the route, treating an empty search as `RouteNotFound`.
fn require_route(engine: &RouteEngine, args: &RouteArgs) -> starroute_lib::Result<Route> {
    let result = if args.direct {
        engine.find_route(&args.from, &args.to)?
    } else {
        engine.find_optimized_route(&args.from, &args.to)?
    };

    result.ok_or_else(|| Error::RouteNotFound {
        start: args.from.clone(),
        goal: args.to.clone(),
        max_jump_range: engine.jump_range(),
    })
}
