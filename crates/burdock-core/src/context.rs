//! One-hop entity neighborhoods

use crate::entity::{Entity, Properties};
use crate::graph::KnowledgeGraph;
use crate::relation::Direction;
use serde::{Deserialize, Serialize};

/// A relationship as seen from one entity
///
/// `neighbor` is the entity on the far end: the target for outgoing
/// relationships, the source for incoming ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipView {
    /// Relationship type label
    #[serde(rename = "type")]
    pub relation_type: String,

    pub direction: Direction,

    pub neighbor: Entity,

    #[serde(default)]
    pub properties: Properties,
}

/// An entity together with its immediate relationships
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityContext {
    pub entity: Entity,

    /// Outgoing relationships first, then incoming, in adjacency order.
    /// Parallel edges each get their own view.
    pub relationships: Vec<RelationshipView>,
}

impl EntityContext {
    /// Assemble the one-hop neighborhood of an entity
    ///
    /// Returns `None` if the id is unknown.
    pub fn for_entity(graph: &KnowledgeGraph, id: &str) -> Option<Self> {
        let entity = graph.entity(id)?.clone();

        let mut relationships = Vec::new();
        for relation in graph.outgoing_edges(id) {
            // Endpoints were validated at build time, so neighbors resolve
            if let Some(neighbor) = graph.entity(relation.target.as_str()) {
                relationships.push(RelationshipView {
                    relation_type: relation.relation_type.clone(),
                    direction: Direction::Outgoing,
                    neighbor: neighbor.clone(),
                    properties: relation.properties.clone(),
                });
            }
        }
        for relation in graph.incoming_edges(id) {
            if let Some(neighbor) = graph.entity(relation.source.as_str()) {
                relationships.push(RelationshipView {
                    relation_type: relation.relation_type.clone(),
                    direction: Direction::Incoming,
                    neighbor: neighbor.clone(),
                    properties: relation.properties.clone(),
                });
            }
        }

        Some(Self {
            entity,
            relationships,
        })
    }
}
