//! Input dataset loading
//!
//! The dataset is a single JSON document with an `entities` array and a
//! `relationships` array. It is parsed once at startup and handed to
//! [`crate::graph::KnowledgeGraph::from_dataset`].

use crate::entity::Entity;
use crate::error::Result;
use crate::relation::Relation;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// The raw graph dataset as loaded from JSON
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDataset {
    #[serde(default)]
    pub entities: Vec<Entity>,

    #[serde(default)]
    pub relationships: Vec<Relation>,
}

impl GraphDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity
    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    /// Append a relationship
    pub fn with_relationship(mut self, relation: Relation) -> Self {
        self.relationships.push(relation);
        self
    }

    /// Parse a dataset from a JSON reader
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a dataset from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        tracing::debug!("Loading dataset from {}", path.as_ref().display());
        Self::from_reader(BufReader::new(file))
    }
}

impl std::str::FromStr for GraphDataset {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
