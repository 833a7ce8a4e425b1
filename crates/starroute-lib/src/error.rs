use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the route planner library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a system name could not be found in the catalog.
    #[error("unknown system name: {name}{}", format_suggestions(.suggestions))]
    UnknownSystem {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a resolved system has no coordinates to route with.
    #[error("system {name} has no coordinates")]
    MissingCoordinates { name: String },

    /// Raised when a route is required but none exists within the jump range
    /// and expansion budget. The planning functions themselves return `Ok(None)`.
    #[error("no route found between {start} and {goal} within {max_jump_range} ly jumps")]
    RouteNotFound {
        start: String,
        goal: String,
        max_jump_range: f64,
    },

    /// Raised when two catalog records share a name.
    #[error("duplicate system name encountered: {name}")]
    DuplicateSystemName { name: String },

    /// Raised when a catalog record has an empty name.
    #[error("invalid system name at record {index}: names must not be empty")]
    InvalidSystemName { index: usize },

    /// Raised when a jump range is not a positive, finite number.
    #[error("invalid jump range {range}: must be a positive, finite distance")]
    InvalidJumpRange { range: f64 },

    /// Raised when an engine configuration fails validation.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Raised when an export format name is not recognised.
    #[error("unsupported export format {format}; expected json or csv")]
    UnsupportedExportFormat { format: String },

    /// Raised when a data file extension does not map to a known loader.
    #[error("unsupported catalog file {path}; expected .json or .csv")]
    UnsupportedCatalogFile { path: PathBuf },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON (de)serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for CSV parsing and writing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
