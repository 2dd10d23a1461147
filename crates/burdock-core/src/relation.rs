//! Relation (edge) types and operations

use crate::entity::{EntityId, Properties};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Unique identifier for a relation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationId(String);

impl RelationId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RelationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RelationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RelationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for RelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which side of a relationship an entity sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Outgoing,
    Incoming,
}

/// A relation (directed edge) between two entities
///
/// Multiple relations may connect the same ordered pair of entities;
/// each keeps its own type and properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    /// Unique identifier
    pub id: RelationId,

    /// Source entity id
    pub source: EntityId,

    /// Target entity id
    pub target: EntityId,

    /// Type of relationship (e.g. "uses", "depends_on")
    #[serde(rename = "type")]
    pub relation_type: String,

    /// Scalar key/value properties
    #[serde(default)]
    pub properties: Properties,
}

impl Relation {
    /// Create a new relation with no properties
    pub fn new(
        id: impl Into<RelationId>,
        source: impl Into<EntityId>,
        target: impl Into<EntityId>,
        relation_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            relation_type: relation_type.into(),
            properties: Properties::new(),
        }
    }

    /// Attach a property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}
