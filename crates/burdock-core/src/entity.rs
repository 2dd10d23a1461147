//! Entity (node) types and operations

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Unique identifier for an entity
///
/// Ids are supplied by the input dataset and treated as opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EntityId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scalar properties attached to an entity or relationship
///
/// Iteration preserves dataset order, so property listings in prompt
/// output are stable across runs.
pub type Properties = IndexMap<String, serde_json::Value>;

/// Render a scalar property value as bare text
///
/// Strings render without quotes; other scalars use their JSON rendering.
/// Used for both scoring and prompt output so the two always agree.
pub fn property_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// An entity in the knowledge graph (a node)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier
    pub id: EntityId,

    /// Human-readable name
    pub name: String,

    /// Entity type/category (free-form label, e.g. "language")
    #[serde(rename = "type")]
    pub entity_type: String,

    /// Scalar key/value properties
    #[serde(default)]
    pub properties: Properties,
}

impl Entity {
    /// Create a new entity with no properties
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        entity_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            entity_type: entity_type.into(),
            properties: Properties::new(),
        }
    }

    /// Attach a property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_creation() {
        let entity = Entity::new("python", "Python", "language");

        assert_eq!(entity.id.as_str(), "python");
        assert_eq!(entity.name, "Python");
        assert_eq!(entity.entity_type, "language");
        assert!(entity.properties.is_empty());
    }

    #[test]
    fn test_entity_with_properties() {
        let entity = Entity::new("python", "Python", "language")
            .with_property("paradigm", "multi-paradigm")
            .with_property("year", 1991);

        assert_eq!(entity.properties.len(), 2);
        assert_eq!(
            entity.properties.get("paradigm"),
            Some(&serde_json::Value::from("multi-paradigm"))
        );
    }

    #[test]
    fn test_entity_deserializes_dataset_shape() {
        let entity: Entity = serde_json::from_str(
            r#"{"id": "rust", "name": "Rust", "type": "language"}"#,
        )
        .unwrap();

        assert_eq!(entity.id.as_str(), "rust");
        assert_eq!(entity.entity_type, "language");
        assert!(entity.properties.is_empty());
    }
}
