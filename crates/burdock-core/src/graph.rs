//! The knowledge graph store
//!
//! Owns the entity table and the directed edges, and answers adjacency
//! queries. Built once from a [`GraphDataset`] and read-only afterwards:
//! the build-then-freeze discipline is the whole consistency story, so the
//! store can be shared read-only across threads without locking.

use crate::context::EntityContext;
use crate::dataset::GraphDataset;
use crate::entity::{Entity, EntityId};
use crate::error::{Error, Result};
use crate::relation::Relation;
use crate::search::{LexicalScorer, SearchQuery};
use crate::traversal::{TraversalEngine, TraversalQuery};
use indexmap::{IndexMap, IndexSet};
use std::collections::{BTreeSet, HashMap};

/// The directed property graph plus its entity index
///
/// Entity iteration order is dataset order, which makes search
/// tie-breaking and adjacency order deterministic for a given build.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeGraph {
    entities: IndexMap<EntityId, Entity>,
    relations: Vec<Relation>,
    // Edge indices into `relations`, in insertion order
    outgoing: HashMap<EntityId, Vec<usize>>,
    incoming: HashMap<EntityId, Vec<usize>>,
}

impl KnowledgeGraph {
    /// Build the graph from a loaded dataset
    ///
    /// All-or-nothing: a duplicate entity id or a relationship referencing
    /// an unknown entity aborts the build.
    pub fn from_dataset(dataset: GraphDataset) -> Result<Self> {
        let mut entities: IndexMap<EntityId, Entity> =
            IndexMap::with_capacity(dataset.entities.len());
        for entity in dataset.entities {
            if entities.contains_key(entity.id.as_str()) {
                return Err(Error::DuplicateEntity(entity.id));
            }
            entities.insert(entity.id.clone(), entity);
        }

        let mut relations = Vec::with_capacity(dataset.relationships.len());
        let mut outgoing: HashMap<EntityId, Vec<usize>> = HashMap::new();
        let mut incoming: HashMap<EntityId, Vec<usize>> = HashMap::new();
        for relation in dataset.relationships {
            for endpoint in [&relation.source, &relation.target] {
                if !entities.contains_key(endpoint.as_str()) {
                    return Err(Error::DanglingReference {
                        relation: relation.id.clone(),
                        entity: endpoint.clone(),
                    });
                }
            }
            let index = relations.len();
            outgoing.entry(relation.source.clone()).or_default().push(index);
            incoming.entry(relation.target.clone()).or_default().push(index);
            relations.push(relation);
        }

        tracing::debug!(
            entities = entities.len(),
            relations = relations.len(),
            "built knowledge graph"
        );

        Ok(Self {
            entities,
            relations,
            outgoing,
            incoming,
        })
    }

    /// Look up an entity by id; `None` means "unknown entity", a normal outcome
    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// All entities, in dataset order
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// All relations, in dataset order
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    /// Targets of outgoing edges from `id`, deduplicated, in edge order
    ///
    /// Empty if `id` has no outgoing edges or does not exist.
    pub fn successors(&self, id: &str) -> IndexSet<EntityId> {
        self.outgoing
            .get(id)
            .map(|edges| {
                edges
                    .iter()
                    .map(|&i| self.relations[i].target.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Sources of incoming edges into `id`, deduplicated, in edge order
    pub fn predecessors(&self, id: &str) -> IndexSet<EntityId> {
        self.incoming
            .get(id)
            .map(|edges| {
                edges
                    .iter()
                    .map(|&i| self.relations[i].source.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All relations from `source` to `target`, including parallel edges
    pub fn edge_data(&self, source: &str, target: &str) -> Vec<&Relation> {
        self.outgoing
            .get(source)
            .map(|edges| {
                edges
                    .iter()
                    .map(|&i| &self.relations[i])
                    .filter(|relation| relation.target.as_str() == target)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Outgoing edges from `id`, in insertion order
    pub fn outgoing_edges(&self, id: &str) -> impl Iterator<Item = &Relation> {
        self.outgoing
            .get(id)
            .into_iter()
            .flatten()
            .map(|&i| &self.relations[i])
    }

    /// Incoming edges into `id`, in insertion order
    pub fn incoming_edges(&self, id: &str) -> impl Iterator<Item = &Relation> {
        self.incoming
            .get(id)
            .into_iter()
            .flatten()
            .map(|&i| &self.relations[i])
    }

    /// Distinct entity types, sorted
    pub fn entity_types(&self) -> BTreeSet<&str> {
        self.entities
            .values()
            .map(|e| e.entity_type.as_str())
            .collect()
    }

    /// Distinct relationship types, sorted
    pub fn relation_types(&self) -> BTreeSet<&str> {
        self.relations
            .iter()
            .map(|r| r.relation_type.as_str())
            .collect()
    }

    /// Search entities by keyword, returning at most `top_k` matches
    /// ordered by descending relevance
    pub fn search(&self, query: &str, top_k: usize) -> Vec<Entity> {
        LexicalScorer::execute(&SearchQuery::new(query).with_top_k(top_k), self)
            .into_iter()
            .map(|m| m.entity)
            .collect()
    }

    /// One-hop context for an entity; `None` if the id is unknown
    pub fn context(&self, id: &str) -> Option<EntityContext> {
        EntityContext::for_entity(self, id)
    }

    /// Bounded depth-first traversal from a seed set
    ///
    /// Returns one context per distinct visited entity, in visitation
    /// order. Unknown seeds are skipped.
    pub fn traverse<I, S>(&self, start: I, max_depth: u32) -> Vec<EntityContext>
    where
        I: IntoIterator<Item = S>,
        S: Into<EntityId>,
    {
        TraversalEngine::execute(&TraversalQuery::new(start).with_depth(max_depth), self).contexts
    }
}
