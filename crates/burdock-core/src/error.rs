//! Error types for Burdock Core

use crate::entity::EntityId;
use crate::relation::RelationId;
use thiserror::Error;

/// Result type alias using Burdock's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Burdock error types
///
/// Build-time structural errors are fatal: the graph is never left
/// partially constructed. Query-time misses are `Option`/empty values,
/// not errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Duplicate entity id: {0}")]
    DuplicateEntity(EntityId),

    #[error("Relation {relation} references unknown entity: {entity}")]
    DanglingReference {
        relation: RelationId,
        entity: EntityId,
    },

    #[error("Invalid dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
}
