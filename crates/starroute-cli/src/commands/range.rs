//! Range command handler listing the systems reachable in one jump.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use starroute_lib::{RouteEngine, SystemPosition};

use crate::commands::describe_error;
use crate::output::{emit, ListFormat};

/// Arguments for the range command.
#[derive(Debug, Clone, Args)]
pub struct RangeArgs {
    /// System to search around.
    #[arg(long)]
    pub system: String,
    /// Search radius in light-years, overriding the configured jump range.
    #[arg(long)]
    pub range: Option<f64>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = ListFormat::Text)]
    pub format: ListFormat,
}

#[derive(Debug, Serialize)]
struct NeighbourRow<'a> {
    name: &'a str,
    distance: f64,
    coordinates: Option<SystemPosition>,
}

/// List every system within range of `args.system`, nearest first.
///
/// The engine is expected to carry `args.range` as its jump range already.
pub fn handle_range_command(engine: &RouteEngine, args: &RangeArgs) -> Result<()> {
    let catalog = engine.catalog();
    let center = catalog.resolve(&args.system).map_err(describe_error)?;
    center.require_position().map_err(describe_error)?;

    let range = engine.jump_range();
    let neighbours = catalog.systems_within_range(center, range);

    let rendered = match args.format {
        ListFormat::Json => {
            let rows: Vec<NeighbourRow<'_>> = neighbours
                .iter()
                .map(|(system, distance)| NeighbourRow {
                    name: &system.name,
                    distance: *distance,
                    coordinates: system.position,
                })
                .collect();
            serde_json::to_string_pretty(&rows)?
        }
        ListFormat::Text => {
            let mut lines = vec![format!(
                "Systems within {:.1} ly of {} ({}):",
                range,
                center.name,
                neighbours.len()
            )];
            lines.extend(
                neighbours
                    .iter()
                    .map(|(system, distance)| format!("  {} ({:.2} ly)", system.name, distance)),
            );
            lines.join("\n")
        }
    };

    emit(&rendered, None)
}
