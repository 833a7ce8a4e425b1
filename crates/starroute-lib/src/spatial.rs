//! KD-tree neighbour index for radius queries over the catalog.
//!
//! The index is an optional acceleration for [`Catalog::systems_within_range`]:
//! a linear scan answers the same query in O(n), the KD-tree in roughly
//! O(log n + k). Both produce the same set of neighbours.
//!
//! Coordinates are stored as `f64` so that the distances reported here match
//! the scan path exactly; the tree is only used to narrow the candidate set
//! and every candidate is re-measured with [`SystemPosition::distance_to`].
//!
//! [`Catalog::systems_within_range`]: crate::Catalog::systems_within_range

use kiddo::float::kdtree::KdTree;
use kiddo::SquaredEuclidean;
use tracing::info;

use crate::catalog::{Catalog, SystemId, SystemPosition};

/// KD-tree bucket size (kiddo default).
const BUCKET_SIZE: usize = 32;

/// Relative slack applied to the query radius before exact re-filtering.
const RADIUS_SLACK: f64 = 1e-9;

/// KD-tree over the positioned systems of one catalog.
///
/// Built once per catalog and never updated; a reload builds a new index.
pub struct SpatialIndex {
    /// Items are catalog system identifiers.
    tree: KdTree<f64, usize, 3, BUCKET_SIZE, u32>,
    positions: Vec<(SystemId, SystemPosition)>,
}

impl SpatialIndex {
    /// Build an index over every positioned system in the catalog.
    pub fn build(catalog: &Catalog) -> Self {
        let positions: Vec<(SystemId, SystemPosition)> = catalog
            .systems()
            .filter_map(|system| system.position.map(|pos| (system.id, pos)))
            .collect();

        let mut tree: KdTree<f64, usize, 3, BUCKET_SIZE, u32> = KdTree::new();
        for (slot, (_, position)) in positions.iter().enumerate() {
            tree.add(&position.as_array(), slot);
        }

        info!(node_count = positions.len(), "built spatial index");

        Self { tree, positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Find all systems within `radius` of `origin`, including any system at
    /// `origin` itself.
    pub fn within_radius(&self, origin: &SystemPosition, radius: f64) -> Vec<(SystemId, f64)> {
        if radius < 0.0 || self.positions.is_empty() {
            return Vec::new();
        }

        let padded = radius * (1.0 + RADIUS_SLACK);
        self.tree
            .within::<SquaredEuclidean>(&origin.as_array(), padded * padded)
            .into_iter()
            .filter_map(|neighbour| {
                let (id, position) = self.positions[neighbour.item];
                let distance = origin.distance_to(&position);
                (distance <= radius).then_some((id, distance))
            })
            .collect()
    }
}

impl std::fmt::Debug for SpatialIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpatialIndex")
            .field("node_count", &self.positions.len())
            .finish()
    }
}
