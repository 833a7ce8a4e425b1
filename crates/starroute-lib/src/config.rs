use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::NeighbourStrategy;
use crate::error::{Error, Result};
use crate::path::DEFAULT_MAX_EXPANSIONS;
use crate::routing::{
    validate_jump_range, RouteOptions, DEFAULT_FUEL_PER_JUMP, DEFAULT_WAYPOINT_THRESHOLD,
};

/// Jump range used when nothing else is configured, in light-years.
pub const DEFAULT_JUMP_RANGE: f64 = 20.0;

/// Engine settings. Every field is optional in the JSON form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub jump_range: f64,
    pub fuel_per_jump: f64,
    pub max_expansions: usize,
    pub waypoint_threshold: usize,
    pub neighbour_strategy: NeighbourStrategy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            jump_range: DEFAULT_JUMP_RANGE,
            fuel_per_jump: DEFAULT_FUEL_PER_JUMP,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            waypoint_threshold: DEFAULT_WAYPOINT_THRESHOLD,
            neighbour_strategy: NeighbourStrategy::Scan,
        }
    }
}

impl EngineConfig {
    /// Load and validate a JSON configuration file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        debug!(path = %path.display(), ?config, "loaded engine configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_jump_range(self.jump_range)?;
        if !self.fuel_per_jump.is_finite() || self.fuel_per_jump < 0.0 {
            return Err(Error::InvalidConfig {
                message: format!(
                    "fuel_per_jump must be a non-negative number, got {}",
                    self.fuel_per_jump
                ),
            });
        }
        if self.max_expansions == 0 {
            return Err(Error::InvalidConfig {
                message: "max_expansions must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Options for a planning call at the configured jump range.
    pub fn route_options(&self) -> RouteOptions {
        self.route_options_with_range(self.jump_range)
    }

    pub fn route_options_with_range(&self, range: f64) -> RouteOptions {
        RouteOptions::new(range)
            .with_fuel_per_jump(self.fuel_per_jump)
            .with_max_expansions(self.max_expansions)
            .with_waypoint_threshold(self.waypoint_threshold)
    }
}
