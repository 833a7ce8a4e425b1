//! Single-waypoint relaxation through anchor systems.
//!
//! Anchors are well-connected hub systems. When the direct search returns a
//! long route, or none within its expansion budget, each anchor is tried as
//! one intermediate stop and the shortest combined candidate wins. Anchors are
//! never chained: at most one waypoint is inserted.

use tracing::{debug, info};

use crate::catalog::{Anchor, Catalog};
use crate::error::Result;

use super::{route_between, validate_jump_range, Route, RouteOptions};

/// Plan a route, then try to improve it by routing through one anchor.
///
/// Direct routes with `options.waypoint_threshold` jumps or fewer are
/// returned unchanged. Otherwise every anchor other than the endpoints is
/// tried and the candidate with the lowest total distance is kept; the direct
/// route wins ties. The returned route names its anchor in `waypoint`.
pub fn find_optimized_route(
    catalog: &Catalog,
    anchors: &[Anchor],
    start: &str,
    goal: &str,
    options: &RouteOptions,
) -> Result<Option<Route>> {
    validate_jump_range(options.max_jump_range)?;
    let start = catalog.resolve(start)?;
    let goal = catalog.resolve(goal)?;

    let direct = route_between(catalog, start, goal, options)?;
    if let Some(route) = &direct {
        if route.jumps <= options.waypoint_threshold {
            return Ok(direct);
        }
    }

    let mut best = direct;
    for anchor in anchors {
        if anchor.system == start.id || anchor.system == goal.id {
            continue;
        }
        let Some(via) = catalog.system(anchor.system) else {
            continue;
        };

        let legs = match route_between(catalog, start, via, options) {
            Ok(Some(first)) => route_between(catalog, via, goal, options)
                .map(|second| second.map(|second| (first, second))),
            other => other.map(|_| None),
        };
        let (first, second) = match legs {
            Ok(Some(legs)) => legs,
            Ok(None) => continue,
            Err(err) => {
                debug!(anchor = %anchor.name, error = %err, "anchor skipped");
                continue;
            }
        };

        let candidate = Route::join(first, second, &anchor.name, options);
        debug!(
            anchor = %anchor.name,
            jumps = candidate.jumps,
            total_distance = candidate.total_distance,
            "anchor candidate"
        );

        let improves = best
            .as_ref()
            .map_or(true, |current| candidate.total_distance < current.total_distance);
        if improves {
            best = Some(candidate);
        }
    }

    if let Some(route) = &best {
        if let Some(anchor) = &route.waypoint {
            info!(
                start = %start.name,
                goal = %goal.name,
                waypoint = %anchor,
                jumps = route.jumps,
                "routing through anchor"
            );
        }
    }

    Ok(best)
}
