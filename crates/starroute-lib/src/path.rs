use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::debug;

use crate::catalog::{Catalog, SystemId, SystemPosition};

/// Default number of node expansions before a search gives up.
pub const DEFAULT_MAX_EXPANSIONS: usize = 1000;

/// Limits applied to a single search over the implicit range graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchBudget {
    /// Maximum distance allowed for any single edge.
    pub max_jump: f64,
    /// Maximum number of systems popped from the open set.
    pub max_expansions: usize,
}

impl SearchBudget {
    pub fn new(max_jump: f64) -> Self {
        Self {
            max_jump,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
        }
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = max_expansions;
        self
    }
}

/// Run A* between `start` and `goal` over the graph where any two positioned
/// systems within `budget.max_jump` of each other are connected.
///
/// Edge weights and the heuristic are both Euclidean distance, so the first
/// time `goal` is popped its path is the shortest one. `None` means no path
/// was found within the expansion budget, not that none exists.
pub fn find_path_a_star(
    catalog: &Catalog,
    start: SystemId,
    goal: SystemId,
    budget: &SearchBudget,
) -> Option<Vec<SystemId>> {
    if start == goal {
        return Some(vec![start]);
    }

    let goal_position = position_of(catalog, goal)?;
    let start_position = position_of(catalog, start)?;

    let mut g_score: HashMap<SystemId, f64> = HashMap::new();
    let mut parents: HashMap<SystemId, SystemId> = HashMap::new();
    let mut closed: HashSet<SystemId> = HashSet::new();
    let mut open = BinaryHeap::new();

    g_score.insert(start, 0.0);
    open.push(AStarEntry::new(
        start,
        0.0,
        start_position.distance_to(&goal_position),
    ));

    let mut expansions = 0usize;
    while let Some(entry) = open.pop() {
        if closed.contains(&entry.node) {
            continue;
        }
        if expansions >= budget.max_expansions {
            debug!(
                expansions,
                open = open.len(),
                "search budget exhausted before reaching goal"
            );
            return None;
        }
        expansions += 1;

        if entry.node == goal {
            debug!(expansions, cost = entry.cost.0, "search reached goal");
            return Some(reconstruct_path(&parents, start, goal));
        }
        closed.insert(entry.node);

        let current_score = entry.cost.0;
        for (next, edge) in catalog.neighbours(entry.node, budget.max_jump) {
            if closed.contains(&next) {
                continue;
            }

            let tentative_g = current_score + edge;
            if tentative_g < *g_score.get(&next).unwrap_or(&f64::INFINITY) {
                g_score.insert(next, tentative_g);
                parents.insert(next, entry.node);
                let heuristic = position_of(catalog, next)
                    .map(|position| position.distance_to(&goal_position))
                    .unwrap_or(0.0);
                open.push(AStarEntry::new(next, tentative_g, heuristic));
            }
        }
    }

    debug!(expansions, "open set exhausted without reaching goal");
    None
}

fn position_of(catalog: &Catalog, id: SystemId) -> Option<SystemPosition> {
    catalog.system(id).and_then(|system| system.position)
}

fn reconstruct_path(
    parents: &HashMap<SystemId, SystemId>,
    start: SystemId,
    goal: SystemId,
) -> Vec<SystemId> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match parents.get(&current) {
            Some(&parent) => {
                path.push(parent);
                current = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct AStarEntry {
    node: SystemId,
    cost: FloatOrd,
    estimate: FloatOrd,
}

impl AStarEntry {
    fn new(node: SystemId, cost: f64, heuristic: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            estimate: FloatOrd(cost + heuristic),
        }
    }
}

impl Ord for AStarEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by estimate.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for AStarEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
