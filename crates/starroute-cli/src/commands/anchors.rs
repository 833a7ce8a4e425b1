//! Anchors command handler.

use anyhow::Result;
use clap::Args;

use starroute_lib::RouteEngine;

use crate::output::{emit, ListFormat};

/// Arguments for the anchors command.
#[derive(Debug, Clone, Args)]
pub struct AnchorsArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = ListFormat::Text)]
    pub format: ListFormat,
}

/// List the anchors that resolved against the loaded catalog.
pub fn handle_anchors_command(engine: &RouteEngine, args: &AnchorsArgs) -> Result<()> {
    let anchors = engine.anchors();

    let rendered = match args.format {
        ListFormat::Json => serde_json::to_string_pretty(&anchors[..])?,
        ListFormat::Text if anchors.is_empty() => "No anchors loaded.".to_string(),
        ListFormat::Text => {
            let mut lines = vec![format!("Anchors ({}):", anchors.len())];
            for anchor in anchors.iter() {
                let mut line = format!("  {} (radius {:.1} ly)", anchor.name, anchor.radius_ly);
                if !anchor.description.is_empty() {
                    line.push_str(&format!(" - {}", anchor.description));
                }
                lines.push(line);
            }
            lines.join("\n")
        }
    };

    emit(&rendered, None)
}
