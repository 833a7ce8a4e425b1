//! Route planner library entry points.
//!
//! This crate holds the star-system catalog, answers range queries over it,
//! and plans jump routes between named systems with A* plus optional
//! single-anchor relaxation. Planned routes can be exported as JSON or CSV.
//! Higher-level consumers (the CLI, a map front end) should only depend on
//! the items exported here.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod path;
pub mod routing;
pub mod source;
pub mod spatial;

pub use catalog::{
    distance, resolve_anchors, Anchor, AnchorRecord, Catalog, NeighbourStrategy, System,
    SystemId, SystemPosition, SystemRecord,
};
pub use config::{EngineConfig, DEFAULT_JUMP_RANGE};
pub use engine::RouteEngine;
pub use error::{Error, Result};
pub use export::{
    export_route, export_route_at, render_route, ExportFormat, RouteExport, RouteRenderMode,
};
pub use path::{find_path_a_star, SearchBudget, DEFAULT_MAX_EXPANSIONS};
pub use routing::{find_optimized_route, find_route, Route, RouteOptions, RouteStop};
pub use source::{load_anchor_records, load_system_records};
pub use spatial::SpatialIndex;
