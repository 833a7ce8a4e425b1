//! Loading configuration and data files into a planning engine.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use starroute_lib::{load_anchor_records, load_system_records, EngineConfig, RouteEngine};

/// Data file locations shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct DataSources {
    pub systems: Option<PathBuf>,
    pub anchors: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl DataSources {
    /// Read the configuration file, or fall back to defaults when none is given.
    pub fn load_config(&self) -> Result<EngineConfig> {
        match &self.config {
            Some(path) => EngineConfig::from_path(path)
                .with_context(|| format!("failed to load configuration from {}", path.display())),
            None => Ok(EngineConfig::default()),
        }
    }

    /// Build an engine over the configured catalog and anchors.
    ///
    /// `range` overrides the configured jump range.
    pub fn load_engine(&self, range: Option<f64>) -> Result<RouteEngine> {
        let mut config = self.load_config()?;
        if let Some(range) = range {
            config.jump_range = range;
        }

        let systems_path = self.systems.as_deref().context(
            "no system catalog given; pass --systems <FILE> or set STARROUTE_SYSTEMS",
        )?;
        let systems = load_system_records(systems_path)
            .with_context(|| format!("failed to read systems from {}", systems_path.display()))?;
        let anchors = match self.anchors.as_deref() {
            Some(path) => read_anchors(path)?,
            None => Vec::new(),
        };

        let mut engine = RouteEngine::new(config).context("invalid planner settings")?;
        engine
            .load_catalog(systems, &anchors)
            .with_context(|| format!("failed to load catalog from {}", systems_path.display()))?;
        debug!(
            systems = engine.catalog().len(),
            anchors = engine.anchors().len(),
            jump_range = engine.jump_range(),
            "planner ready"
        );
        Ok(engine)
    }
}

fn read_anchors(path: &Path) -> Result<Vec<starroute_lib::AnchorRecord>> {
    load_anchor_records(path)
        .with_context(|| format!("failed to read anchors from {}", path.display()))
}
