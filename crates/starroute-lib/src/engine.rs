//! Planning sessions over a shared catalog snapshot.
//!
//! A [`RouteEngine`] owns the state of one planner session: the catalog it
//! routes over, the resolved anchors, the configured jump range and the route
//! currently on display. The catalog itself is an immutable `Arc<Catalog>`, so
//! many engines (for example one per request in a server) can share it.

use std::sync::Arc;

use tracing::{info, warn};

use crate::catalog::{resolve_anchors, Anchor, AnchorRecord, Catalog, SystemRecord};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::routing::{find_optimized_route, find_route, validate_jump_range, Route};

/// Endpoints of the route the session is currently tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveRoute {
    start: String,
    goal: String,
}

/// One planning session over a shared catalog snapshot.
///
/// Cloning is cheap: the catalog and anchors are reference counted.
#[derive(Debug, Clone)]
pub struct RouteEngine {
    catalog: Arc<Catalog>,
    anchors: Arc<[Anchor]>,
    config: EngineConfig,
    active: Option<ActiveRoute>,
    route: Option<Route>,
}

impl RouteEngine {
    /// Create an engine with an empty catalog.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            catalog: Arc::new(Catalog::default()),
            anchors: Arc::from(Vec::new()),
            config,
            active: None,
            route: None,
        })
    }

    /// Create an engine over an existing snapshot.
    pub fn with_catalog(
        config: EngineConfig,
        catalog: Arc<Catalog>,
        anchors: Arc<[Anchor]>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            catalog,
            anchors,
            config,
            active: None,
            route: None,
        })
    }

    /// Replace the catalog and anchors wholesale.
    ///
    /// On failure the previous catalog and anchors stay in place. Anchors that
    /// do not resolve against the new catalog are dropped with a warning.
    pub fn load_catalog<I>(&mut self, systems: I, anchors: &[AnchorRecord]) -> Result<()>
    where
        I: IntoIterator<Item = SystemRecord>,
    {
        let catalog = match Catalog::from_records(systems) {
            Ok(catalog) => catalog.with_neighbour_strategy(self.config.neighbour_strategy),
            Err(err) => {
                warn!(error = %err, "catalog load failed; keeping previous catalog");
                return Err(err);
            }
        };
        let resolved = resolve_anchors(&catalog, anchors);
        info!(
            systems = catalog.len(),
            anchors = resolved.len(),
            strategy = %catalog.neighbour_strategy(),
            "catalog replaced"
        );

        self.catalog = Arc::new(catalog);
        self.anchors = Arc::from(resolved);
        self.active = None;
        self.route = None;
        Ok(())
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn anchors(&self) -> &Arc<[Anchor]> {
        &self.anchors
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn jump_range(&self) -> f64 {
        self.config.jump_range
    }

    /// Shortest route at the configured jump range, without anchors.
    pub fn find_route(&self, start: &str, goal: &str) -> Result<Option<Route>> {
        find_route(&self.catalog, start, goal, &self.config.route_options())
    }

    /// Route at the configured jump range, relaxed through anchors.
    pub fn find_optimized_route(&self, start: &str, goal: &str) -> Result<Option<Route>> {
        find_optimized_route(
            &self.catalog,
            &self.anchors,
            start,
            goal,
            &self.config.route_options(),
        )
    }

    /// Plan an optimized route and make it the active one.
    ///
    /// The endpoints are remembered even when no route is found so that a
    /// later range change can retry them.
    pub fn plan(&mut self, start: &str, goal: &str) -> Result<Option<&Route>> {
        let route = self.find_optimized_route(start, goal)?;
        self.active = Some(ActiveRoute {
            start: start.to_string(),
            goal: goal.to_string(),
        });
        self.route = route;
        Ok(self.route.as_ref())
    }

    /// The currently held route, if any.
    pub fn active_route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    /// Forget the active route.
    pub fn clear_route(&mut self) {
        self.active = None;
        self.route = None;
    }

    /// Change the default jump range and recompute the active route with it.
    ///
    /// The held route is replaced, never patched. An invalid range, or a
    /// recompute that fails, leaves the session untouched.
    pub fn update_jump_range(&mut self, range: f64) -> Result<Option<&Route>> {
        validate_jump_range(range)?;

        let Some(active) = self.active.as_ref() else {
            self.config.jump_range = range;
            return Ok(None);
        };
        info!(
            range,
            start = %active.start,
            goal = %active.goal,
            "jump range changed; recomputing active route"
        );
        let route = find_optimized_route(
            &self.catalog,
            &self.anchors,
            &active.start,
            &active.goal,
            &self.config.route_options_with_range(range),
        )?;

        self.config.jump_range = range;
        self.route = route;
        Ok(self.route.as_ref())
    }
}
