//! Bounded multi-source graph traversal
//!
//! Depth-first exploration around a seed set, recording the one-hop
//! context of every entity visited. The visited set is owned by the call
//! and shared across all seeds, which together with the depth ceiling
//! makes termination on cyclic graphs an explicit invariant.

use crate::context::EntityContext;
use crate::entity::EntityId;
use crate::graph::KnowledgeGraph;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

fn default_depth() -> u32 {
    2
}

/// Traversal query builder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraversalQuery {
    /// Seed entity ids, each explored from depth 0
    pub start: Vec<EntityId>,

    /// Hard depth ceiling. Entities reached exactly at this depth are
    /// recorded but not expanded further.
    #[serde(default = "default_depth")]
    pub max_depth: u32,
}

impl TraversalQuery {
    /// Create a traversal query from seed ids
    pub fn new<I, S>(start: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<EntityId>,
    {
        Self {
            start: start.into_iter().map(Into::into).collect(),
            max_depth: default_depth(),
        }
    }

    /// Set the maximum traversal depth
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }
}

/// Traversal statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraversalStats {
    pub nodes_visited: usize,
    pub neighbors_expanded: usize,
    pub max_depth_reached: u32,
}

/// Result of a traversal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraversalResult {
    /// One context per distinct visited entity, in visitation order
    pub contexts: Vec<EntityContext>,

    pub stats: TraversalStats,
}

/// Depth-first traversal engine
pub struct TraversalEngine;

impl TraversalEngine {
    /// Execute a traversal query
    ///
    /// Each entity is visited at most once per call regardless of how many
    /// paths reach it. Unknown seeds produce no entry. Expansion follows
    /// successors first, then predecessors, at `depth + 1`.
    pub fn execute(query: &TraversalQuery, graph: &KnowledgeGraph) -> TraversalResult {
        tracing::debug!(
            seeds = query.start.len(),
            max_depth = query.max_depth,
            "executing traversal"
        );

        let mut visited: HashSet<EntityId> = HashSet::new();
        let mut result = TraversalResult {
            contexts: Vec::new(),
            stats: TraversalStats::default(),
        };

        for seed in &query.start {
            Self::visit(seed, 0, query.max_depth, graph, &mut visited, &mut result);
        }

        tracing::debug!(
            nodes = result.stats.nodes_visited,
            "traversal finished"
        );
        result
    }

    fn visit(
        id: &EntityId,
        depth: u32,
        max_depth: u32,
        graph: &KnowledgeGraph,
        visited: &mut HashSet<EntityId>,
        result: &mut TraversalResult,
    ) {
        if visited.contains(id) {
            return;
        }
        let Some(context) = EntityContext::for_entity(graph, id.as_str()) else {
            // Unknown id: skip silently
            return;
        };

        visited.insert(id.clone());
        result.stats.nodes_visited += 1;
        result.stats.max_depth_reached = result.stats.max_depth_reached.max(depth);
        result.contexts.push(context);

        if depth < max_depth {
            for successor in graph.successors(id.as_str()) {
                result.stats.neighbors_expanded += 1;
                Self::visit(&successor, depth + 1, max_depth, graph, visited, result);
            }
            for predecessor in graph.predecessors(id.as_str()) {
                result.stats.neighbors_expanded += 1;
                Self::visit(&predecessor, depth + 1, max_depth, graph, visited, result);
            }
        }
    }
}
