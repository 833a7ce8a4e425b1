use std::fmt::{self, Write};
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::SystemPosition;
use crate::error::{Error, Result};
use crate::routing::{Route, RouteStop};

/// Header row of CSV exports. Downstream consumers match on it verbatim.
pub const CSV_HEADER: [&str; 5] = ["System Name", "X", "Y", "Z", "Distance from Previous"];

/// File formats a route can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// Conventional file extension for the format.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(Error::UnsupportedExportFormat {
                format: value.to_string(),
            }),
        }
    }
}

/// One system in a JSON export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedSystem {
    pub name: String,
    pub coordinates: SystemPosition,
}

/// JSON document written for an exported route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteExport {
    pub timestamp: String,
    pub start: String,
    pub end: String,
    pub total_distance: f64,
    pub jumps: usize,
    pub fuel_required: f64,
    pub max_jump_range: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waypoint: Option<String>,
    pub route: Vec<ExportedSystem>,
}

impl RouteExport {
    pub fn from_route(route: &Route, timestamp: DateTime<Utc>) -> Self {
        let name_at = |step: Option<&RouteStop>| {
            step.map(|step| step.name.clone()).unwrap_or_default()
        };

        Self {
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            start: name_at(route.start()),
            end: name_at(route.end()),
            total_distance: route.total_distance,
            jumps: route.jumps,
            fuel_required: route.fuel_required,
            max_jump_range: route.max_jump_range,
            waypoint: route.waypoint.clone(),
            route: route
                .steps
                .iter()
                .map(|step| ExportedSystem {
                    name: step.name.clone(),
                    coordinates: step.position,
                })
                .collect(),
        }
    }
}

/// Serialize a route for download, stamped with the current time.
pub fn export_route(route: &Route, format: ExportFormat) -> Result<String> {
    export_route_at(route, format, Utc::now())
}

/// Serialize a route with an explicit timestamp (JSON only uses it).
pub fn export_route_at(
    route: &Route,
    format: ExportFormat,
    timestamp: DateTime<Utc>,
) -> Result<String> {
    match format {
        ExportFormat::Json => {
            let document = RouteExport::from_route(route, timestamp);
            Ok(serde_json::to_string_pretty(&document)?)
        }
        ExportFormat::Csv => export_csv(route),
    }
}

fn export_csv(route: &Route) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for (step, leg) in route.steps.iter().zip(route.leg_distances()) {
        writer.write_record([
            step.name.clone(),
            step.position.x.to_string(),
            step.position.y.to_string(),
            step.position.z.to_string(),
            leg.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| Error::Io(err.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|err| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err)))
}

/// Presentation style for turning a [`Route`] into terminal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteRenderMode {
    #[default]
    PlainText,
    /// One system per line with `+`/`|`/`-` markers.
    Basic,
}

/// Render a route for display.
pub fn render_route(route: &Route, mode: RouteRenderMode) -> String {
    match mode {
        RouteRenderMode::PlainText => render_plain(route),
        RouteRenderMode::Basic => render_basic(route),
    }
}

fn render_plain(route: &Route) -> String {
    let mut buffer = String::new();
    let start = route.start().map_or("<unknown>", |s| s.name.as_str());
    let end = route.end().map_or("<unknown>", |s| s.name.as_str());
    let _ = writeln!(
        buffer,
        "Route: {} -> {} ({} jumps, {:.2} ly, fuel {:.1} t, range {:.1} ly)",
        start, end, route.jumps, route.total_distance, route.fuel_required, route.max_jump_range
    );
    if let Some(waypoint) = &route.waypoint {
        let _ = writeln!(buffer, "Via anchor: {waypoint}");
    }
    for (index, (step, leg)) in route.steps.iter().zip(route.leg_distances()).enumerate() {
        if index == 0 {
            let _ = writeln!(buffer, "{:>3}: {}", index, step.name);
        } else {
            let _ = writeln!(buffer, "{:>3}: {} ({:.2} ly)", index, step.name, leg);
        }
    }
    buffer
}

fn render_basic(route: &Route) -> String {
    let mut buffer = String::new();
    let len = route.steps.len();
    for (i, step) in route.steps.iter().enumerate() {
        let prefix = if i == 0 {
            '+'
        } else if i + 1 == len {
            '-'
        } else {
            '|'
        };
        let _ = writeln!(buffer, "{} {}", prefix, step.name);
    }
    let _ = writeln!(buffer, "via {} jumps / {:.2} ly", route.jumps, route.total_distance);
    buffer
}
