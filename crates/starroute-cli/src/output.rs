//! Output formats and writers for command results.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::info;

use starroute_lib::{export_route, render_route, ExportFormat, Route, RouteRenderMode};

/// How a planned route is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Summary line followed by every stop.
    #[default]
    Text,
    /// Minimal `+ / | / -` listing.
    Basic,
    /// JSON export document.
    Json,
    /// CSV export with one row per stop.
    Csv,
}

impl OutputFormat {
    /// Render `route` in this format.
    pub fn render_route(self, route: &Route) -> Result<String> {
        let rendered = match self {
            OutputFormat::Text => render_route(route, RouteRenderMode::PlainText),
            OutputFormat::Basic => render_route(route, RouteRenderMode::Basic),
            OutputFormat::Json => {
                export_route(route, ExportFormat::Json).context("failed to export route")?
            }
            OutputFormat::Csv => {
                export_route(route, ExportFormat::Csv).context("failed to export route")?
            }
        };
        Ok(rendered)
    }
}

/// Format for the listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ListFormat {
    #[default]
    Text,
    Json,
}

/// Write `contents` to `path`, or to stdout when no path is given.
pub fn emit(contents: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, contents)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = contents.len(), "wrote output file");
            Ok(())
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            if !contents.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
            Ok(())
        }
    }
}
