//! Route planning over the implicit range graph.
//!
//! This module provides:
//! - [`RouteOptions`] - jump range, fuel and search limits for one request
//! - [`Route`] - an immutable planned route with derived totals
//! - [`find_route`] - shortest path between two named systems
//! - [`find_optimized_route`] - `find_route` plus single-anchor relaxation
//!
//! # Example
//!
//! ```
//! use starroute_lib::{find_route, Catalog, RouteOptions, SystemRecord};
//!
//! let catalog = Catalog::from_records(vec![
//!     SystemRecord::new("S1", 0.0, 0.0, 0.0),
//!     SystemRecord::new("S2", 10.0, 0.0, 0.0),
//!     SystemRecord::new("S3", 25.0, 0.0, 0.0),
//! ])?;
//! let route = find_route(&catalog, "S1", "S3", &RouteOptions::new(15.0))?
//!     .expect("route exists");
//! assert_eq!(route.jumps, 2);
//! # Ok::<(), starroute_lib::Error>(())
//! ```

mod waypoint;

pub use waypoint::find_optimized_route;

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, System, SystemId, SystemPosition};
use crate::error::{Error, Result};
use crate::path::{find_path_a_star, SearchBudget, DEFAULT_MAX_EXPANSIONS};

/// Fuel consumed per jump, in tons.
pub const DEFAULT_FUEL_PER_JUMP: f64 = 2.0;

/// Direct routes with at most this many jumps skip anchor relaxation.
pub const DEFAULT_WAYPOINT_THRESHOLD: usize = 10;

/// Parameters for a single planning call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteOptions {
    pub max_jump_range: f64,
    pub fuel_per_jump: f64,
    pub max_expansions: usize,
    pub waypoint_threshold: usize,
}

impl RouteOptions {
    pub fn new(max_jump_range: f64) -> Self {
        Self {
            max_jump_range,
            fuel_per_jump: DEFAULT_FUEL_PER_JUMP,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            waypoint_threshold: DEFAULT_WAYPOINT_THRESHOLD,
        }
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    pub fn with_fuel_per_jump(mut self, fuel_per_jump: f64) -> Self {
        self.fuel_per_jump = fuel_per_jump;
        self
    }

    pub fn with_waypoint_threshold(mut self, waypoint_threshold: usize) -> Self {
        self.waypoint_threshold = waypoint_threshold;
        self
    }

    fn budget(&self) -> SearchBudget {
        SearchBudget::new(self.max_jump_range).with_max_expansions(self.max_expansions)
    }

    fn fuel_for(&self, jumps: usize) -> f64 {
        jumps as f64 * self.fuel_per_jump
    }
}

/// Reject jump ranges the search cannot use.
pub fn validate_jump_range(range: f64) -> Result<()> {
    if range.is_finite() && range > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidJumpRange { range })
    }
}

/// One system visited by a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteStop {
    pub id: SystemId,
    pub name: String,
    pub position: SystemPosition,
}

/// Planned route between two systems.
///
/// Routes are values: changing any input means planning a new one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub steps: Vec<RouteStop>,
    pub total_distance: f64,
    pub jumps: usize,
    pub fuel_required: f64,
    pub max_jump_range: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waypoint: Option<String>,
}

impl Route {
    fn from_path(catalog: &Catalog, path: &[SystemId], options: &RouteOptions) -> Result<Self> {
        let steps = path
            .iter()
            .map(|id| {
                let system = catalog.system(*id).ok_or_else(|| Error::UnknownSystem {
                    name: format!("#{id}"),
                    suggestions: Vec::new(),
                })?;
                Ok(RouteStop {
                    id: system.id,
                    name: system.name.clone(),
                    position: system.require_position()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let total_distance = steps
            .windows(2)
            .map(|pair| pair[0].position.distance_to(&pair[1].position))
            .sum();
        let jumps = steps.len().saturating_sub(1);

        Ok(Self {
            steps,
            total_distance,
            jumps,
            fuel_required: options.fuel_for(jumps),
            max_jump_range: options.max_jump_range,
            waypoint: None,
        })
    }

    /// Concatenate two legs that meet at `via`, dropping the repeated junction.
    fn join(first: Route, second: Route, via: &str, options: &RouteOptions) -> Self {
        let mut steps = first.steps;
        steps.extend(second.steps.into_iter().skip(1));
        let jumps = first.jumps + second.jumps;

        Self {
            steps,
            total_distance: first.total_distance + second.total_distance,
            jumps,
            fuel_required: options.fuel_for(jumps),
            max_jump_range: options.max_jump_range,
            waypoint: Some(via.to_string()),
        }
    }

    pub fn start(&self) -> Option<&RouteStop> {
        self.steps.first()
    }

    pub fn end(&self) -> Option<&RouteStop> {
        self.steps.last()
    }

    /// Ordered system names from start to end.
    pub fn system_names(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.name.as_str()).collect()
    }

    /// Distance of each stop from the previous one; the first entry is zero.
    pub fn leg_distances(&self) -> Vec<f64> {
        let mut legs = Vec::with_capacity(self.steps.len());
        let mut previous: Option<&SystemPosition> = None;
        for step in &self.steps {
            legs.push(previous.map_or(0.0, |p| p.distance_to(&step.position)));
            previous = Some(&step.position);
        }
        legs
    }
}

/// Compute the shortest route between two named systems.
///
/// Returns `Ok(None)` when no route exists within the jump range and
/// expansion budget. Unknown names and systems without coordinates are errors.
pub fn find_route(
    catalog: &Catalog,
    start: &str,
    goal: &str,
    options: &RouteOptions,
) -> Result<Option<Route>> {
    validate_jump_range(options.max_jump_range)?;
    let start = catalog.resolve(start)?;
    let goal = catalog.resolve(goal)?;
    route_between(catalog, start, goal, options)
}

pub(crate) fn route_between(
    catalog: &Catalog,
    start: &System,
    goal: &System,
    options: &RouteOptions,
) -> Result<Option<Route>> {
    let start_position = start.require_position()?;
    let goal_position = goal.require_position()?;

    let direct = start_position.distance_to(&goal_position);
    if direct <= options.max_jump_range {
        let path = if start.id == goal.id {
            vec![start.id]
        } else {
            vec![start.id, goal.id]
        };
        debug!(start = %start.name, goal = %goal.name, direct, "direct jump in range");
        return Route::from_path(catalog, &path, options).map(Some);
    }

    match find_path_a_star(catalog, start.id, goal.id, &options.budget()) {
        Some(path) => {
            let route = Route::from_path(catalog, &path, options)?;
            debug!(
                start = %start.name,
                goal = %goal.name,
                jumps = route.jumps,
                total_distance = route.total_distance,
                "route found"
            );
            Ok(Some(route))
        }
        None => {
            debug!(
                start = %start.name,
                goal = %goal.name,
                max_jump_range = options.max_jump_range,
                "no route within budget"
            );
            Ok(None)
        }
    }
}
