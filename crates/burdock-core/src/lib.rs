//! Burdock Core - Knowledge-graph retrieval engine
//!
//! This crate provides the in-memory directed property graph, the lexical
//! entity scorer, one-hop context assembly, and bounded multi-source
//! traversal behind the Burdock RAG system. The graph is built once from
//! a loaded dataset and is read-only afterwards; the surrounding system
//! turns the results into LLM prompt context via [`format_for_prompt`].

pub mod context;
pub mod dataset;
pub mod entity;
pub mod error;
pub mod format;
pub mod graph;
pub mod relation;
pub mod search;
pub mod traversal;

pub use context::{EntityContext, RelationshipView};
pub use dataset::GraphDataset;
pub use entity::{Entity, EntityId, Properties};
pub use error::{Error, Result};
pub use format::{format_for_prompt, NO_RESULTS_MESSAGE};
pub use graph::KnowledgeGraph;
pub use relation::{Direction, Relation, RelationId};
pub use search::{LexicalScorer, SearchMatch, SearchQuery};
pub use traversal::{TraversalEngine, TraversalQuery, TraversalResult, TraversalStats};
