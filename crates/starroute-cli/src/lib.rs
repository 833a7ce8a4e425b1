//! Star route planner CLI library.
//!
//! Argument types, data loading and output formatting for the `starroute`
//! binary. Kept in a library so the handlers can be unit tested.

pub mod commands;
pub mod context;
pub mod logging;
pub mod output;
