use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::spatial::SpatialIndex;

/// Dense identifier for a system, assigned in ingestion order.
pub type SystemId = usize;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Cartesian coordinates for a star system, in light-years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl SystemPosition {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Calculate the Euclidean distance to another position.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub(crate) fn as_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// Straight-line distance in light-years between two system coordinates.
pub fn distance(a: &SystemPosition, b: &SystemPosition) -> f64 {
    a.distance_to(b)
}

/// A star system held by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct System {
    pub id: SystemId,
    pub name: String,
    pub position: Option<SystemPosition>,
}

impl System {
    /// Return the position or fail loudly for malformed entries.
    pub fn require_position(&self) -> Result<SystemPosition> {
        self.position.ok_or_else(|| {
            warn!(system = %self.name, "catalog entry has no coordinates");
            Error::MissingCoordinates {
                name: self.name.clone(),
            }
        })
    }
}

/// Raw system record as supplied by the catalog source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemRecord {
    pub name: String,
    #[serde(default)]
    pub coords: Option<SystemPosition>,
}

impl SystemRecord {
    pub fn new(name: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            name: name.into(),
            coords: Some(SystemPosition::new(x, y, z)),
        }
    }
}

/// Raw anchor descriptor as supplied by the anchor source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorRecord {
    pub name: String,
    #[serde(default)]
    pub radius_ly: f64,
    #[serde(default)]
    pub description: String,
}

impl AnchorRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            radius_ly: 0.0,
            description: String::new(),
        }
    }
}

/// Anchor resolved against a catalog. Only the system position matters for routing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Anchor {
    pub system: SystemId,
    pub name: String,
    pub radius_ly: f64,
    pub description: String,
}

/// How neighbour queries are answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeighbourStrategy {
    /// Linear scan over every catalog entry.
    #[default]
    Scan,
    /// KD-tree radius query.
    KdTree,
}

impl fmt::Display for NeighbourStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            NeighbourStrategy::Scan => "scan",
            NeighbourStrategy::KdTree => "kdtree",
        };
        f.write_str(value)
    }
}

/// Immutable snapshot of every known star system.
///
/// A catalog is never mutated after construction. Share it between planning
/// sessions with `Arc<Catalog>` and rebuild it wholesale on reload.
#[derive(Debug, Default)]
pub struct Catalog {
    systems: Vec<System>,
    name_to_id: HashMap<String, SystemId>,
    spatial: Option<SpatialIndex>,
}

impl Catalog {
    /// Build a catalog from raw records.
    ///
    /// Names are trimmed once here; lookups afterwards are exact and
    /// case-sensitive. Empty or duplicate names reject the whole batch.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = SystemRecord>,
    {
        let mut systems = Vec::new();
        let mut name_to_id = HashMap::new();

        for (index, record) in records.into_iter().enumerate() {
            let name = record.name.trim();
            if name.is_empty() {
                return Err(Error::InvalidSystemName { index });
            }
            if name_to_id.contains_key(name) {
                return Err(Error::DuplicateSystemName {
                    name: name.to_string(),
                });
            }

            let id = systems.len();
            name_to_id.insert(name.to_string(), id);
            systems.push(System {
                id,
                name: name.to_string(),
                position: record.coords,
            });
        }

        let unpositioned = systems.iter().filter(|s| s.position.is_none()).count();
        if unpositioned > 0 {
            warn!(unpositioned, "catalog contains systems without coordinates");
        }
        info!(systems = systems.len(), "loaded system catalog");

        Ok(Self {
            systems,
            name_to_id,
            spatial: None,
        })
    }

    /// Select how `systems_within_range` answers queries.
    pub fn with_neighbour_strategy(mut self, strategy: NeighbourStrategy) -> Self {
        self.spatial = match strategy {
            NeighbourStrategy::Scan => None,
            NeighbourStrategy::KdTree => Some(SpatialIndex::build(&self)),
        };
        self
    }

    pub fn neighbour_strategy(&self) -> NeighbourStrategy {
        if self.spatial.is_some() {
            NeighbourStrategy::KdTree
        } else {
            NeighbourStrategy::Scan
        }
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Iterate over systems in ingestion order.
    pub fn systems(&self) -> impl Iterator<Item = &System> {
        self.systems.iter()
    }

    pub fn system(&self, id: SystemId) -> Option<&System> {
        self.systems.get(id)
    }

    /// Lookup a system identifier by its exact name.
    pub fn system_id_by_name(&self, name: &str) -> Option<SystemId> {
        self.name_to_id.get(name).copied()
    }

    pub fn system_by_name(&self, name: &str) -> Option<&System> {
        self.system_id_by_name(name).and_then(|id| self.system(id))
    }

    /// Resolve a name or fail with `UnknownSystem` carrying close matches.
    pub fn resolve(&self, name: &str) -> Result<&System> {
        self.system_by_name(name).ok_or_else(|| Error::UnknownSystem {
            name: name.to_string(),
            suggestions: self.fuzzy_system_matches(name, 3),
        })
    }

    /// Return up to `limit` catalog names similar to `name`, best first.
    pub fn fuzzy_system_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(f64, &str)> = self
            .systems
            .iter()
            .map(|system| (strsim::jaro_winkler(name, &system.name), system.name.as_str()))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// Every positioned system (excluding `center`) within `range`, nearest first.
    pub fn systems_within_range(&self, center: &System, range: f64) -> Vec<(&System, f64)> {
        self.neighbours(center.id, range)
            .into_iter()
            .filter_map(|(id, distance)| self.system(id).map(|system| (system, distance)))
            .collect()
    }

    /// Identifier form of [`Catalog::systems_within_range`], used by the search.
    pub(crate) fn neighbours(&self, center: SystemId, range: f64) -> Vec<(SystemId, f64)> {
        let Some(origin) = self.system(center).and_then(|system| system.position) else {
            return Vec::new();
        };

        let mut found: Vec<(SystemId, f64)> = match &self.spatial {
            Some(index) => index
                .within_radius(&origin, range)
                .into_iter()
                .filter(|(id, _)| *id != center)
                .collect(),
            None => self
                .systems
                .iter()
                .filter(|system| system.id != center)
                .filter_map(|system| {
                    let position = system.position?;
                    let distance = origin.distance_to(&position);
                    (distance <= range).then_some((system.id, distance))
                })
                .collect(),
        };

        found.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        found
    }
}

/// Resolve anchor descriptors against `catalog`.
///
/// Names that do not resolve are skipped with a warning. Repeated names keep
/// their first occurrence.
pub fn resolve_anchors(catalog: &Catalog, records: &[AnchorRecord]) -> Vec<Anchor> {
    let mut seen = HashSet::new();
    let mut anchors = Vec::with_capacity(records.len());

    for record in records {
        let name = record.name.trim();
        let Some(system) = catalog.system_by_name(name) else {
            warn!(anchor = %name, "anchor does not resolve to a catalog system; skipping");
            continue;
        };
        if !seen.insert(system.id) {
            debug!(anchor = %name, "duplicate anchor ignored");
            continue;
        }
        anchors.push(Anchor {
            system: system.id,
            name: system.name.clone(),
            radius_ly: record.radius_ly,
            description: record.description.clone(),
        });
    }

    debug!(
        resolved = anchors.len(),
        supplied = records.len(),
        "resolved anchors"
    );
    anchors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_catalog() -> Catalog {
        Catalog::from_records(vec![
            SystemRecord::new("S1", 0.0, 0.0, 0.0),
            SystemRecord::new("S2", 10.0, 0.0, 0.0),
            SystemRecord::new("S3", 25.0, 0.0, 0.0),
        ])
        .expect("valid records")
    }

    #[test]
    fn distance_is_symmetric() {
        let a = SystemPosition::new(1.0, -2.0, 3.5);
        let b = SystemPosition::new(-4.0, 6.0, 0.25);
        assert_eq!(distance(&a, &b), distance(&b, &a));
        assert!((distance(&a, &b) - 9.9781).abs() < 1e-3);
    }

    #[test]
    fn names_are_trimmed_at_ingestion() {
        let catalog =
            Catalog::from_records(vec![SystemRecord::new("  Sol ", 0.0, 0.0, 0.0)]).unwrap();
        assert_eq!(catalog.system_id_by_name("Sol"), Some(0));
        assert_eq!(catalog.system_id_by_name("sol"), None);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = Catalog::from_records(vec![
            SystemRecord::new("Sol", 0.0, 0.0, 0.0),
            SystemRecord::new("Sol", 1.0, 0.0, 0.0),
        ])
        .expect_err("duplicate");
        assert!(matches!(err, Error::DuplicateSystemName { name } if name == "Sol"));
    }

    #[test]
    fn empty_names_are_rejected() {
        let err = Catalog::from_records(vec![SystemRecord::new("   ", 0.0, 0.0, 0.0)])
            .expect_err("empty name");
        assert!(matches!(err, Error::InvalidSystemName { index: 0 }));
    }

    #[test]
    fn range_query_excludes_center_and_sorts() {
        let catalog = line_catalog();
        let center = catalog.system_by_name("S2").unwrap();
        let found: Vec<(&str, f64)> = catalog
            .systems_within_range(center, 15.0)
            .into_iter()
            .map(|(system, d)| (system.name.as_str(), d))
            .collect();
        assert_eq!(found, vec![("S1", 10.0), ("S3", 15.0)]);
    }

    #[test]
    fn range_query_skips_unpositioned_systems() {
        let catalog = Catalog::from_records(vec![
            SystemRecord::new("A", 0.0, 0.0, 0.0),
            SystemRecord {
                name: "Ghost".to_string(),
                coords: None,
            },
        ])
        .unwrap();
        let center = catalog.system_by_name("A").unwrap();
        assert!(catalog.systems_within_range(center, 1_000.0).is_empty());

        let ghost = catalog.system_by_name("Ghost").unwrap();
        assert!(catalog.systems_within_range(ghost, 1_000.0).is_empty());
        assert!(matches!(
            ghost.require_position(),
            Err(Error::MissingCoordinates { .. })
        ));
    }

    #[test]
    fn resolve_offers_suggestions() {
        let catalog = Catalog::from_records(vec![
            SystemRecord::new("Colonia", 0.0, 0.0, 0.0),
            SystemRecord::new("Ratraii", 5.0, 0.0, 0.0),
        ])
        .unwrap();
        let err = catalog.resolve("Colnia").expect_err("unknown");
        match err {
            Error::UnknownSystem { suggestions, .. } => {
                assert_eq!(suggestions, vec!["Colonia".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unresolved_anchors_are_dropped() {
        let catalog = line_catalog();
        let anchors = resolve_anchors(
            &catalog,
            &[
                AnchorRecord::new("S2"),
                AnchorRecord::new("Missing"),
                AnchorRecord::new("S2"),
            ],
        );
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].name, "S2");
        assert_eq!(anchors[0].system, 1);
    }
}
