//! Lexical entity search
//!
//! Ranks entities against a free-text query with a deterministic weighted
//! token-matching heuristic. No embeddings, no external calls; relevance
//! is explainable from the weights alone.

use crate::entity::{property_text, Entity};
use crate::graph::KnowledgeGraph;
use serde::{Deserialize, Serialize};

/// Weight for a token contained in the entity name
pub const NAME_WEIGHT: u32 = 10;

/// Weight for a token contained in the entity type
pub const TYPE_WEIGHT: u32 = 5;

/// Weight per property whose key or value contains a token
pub const PROPERTY_WEIGHT: u32 = 3;

fn default_top_k() -> usize {
    5
}

/// Search query builder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text query, tokenized on runs of non-word characters
    pub text: String,

    /// Maximum number of entities to return
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl SearchQuery {
    /// Create a new search query
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            top_k: default_top_k(),
        }
    }

    /// Set the result limit
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}

/// An entity matched by a search, with its relevance score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMatch {
    pub entity: Entity,
    pub score: u32,
}

/// Split a query into lowercase tokens
///
/// Word characters are alphanumerics and underscore; every other run of
/// characters separates tokens. A query of only separators yields no
/// tokens.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Score an entity against a token list
///
/// Each token scores once per field it is contained in: name (10), type
/// (5), and each property whose key or value contains it (3).
pub fn score(entity: &Entity, tokens: &[String]) -> u32 {
    let name = entity.name.to_lowercase();
    let entity_type = entity.entity_type.to_lowercase();

    let mut total = 0;
    for token in tokens {
        if name.contains(token.as_str()) {
            total += NAME_WEIGHT;
        }
        if entity_type.contains(token.as_str()) {
            total += TYPE_WEIGHT;
        }
    }

    for (key, value) in &entity.properties {
        let key = key.to_lowercase();
        let value = property_text(value).to_lowercase();
        for token in tokens {
            if key.contains(token.as_str()) || value.contains(token.as_str()) {
                total += PROPERTY_WEIGHT;
            }
        }
    }

    total
}

/// Lexical search engine (stateless)
pub struct LexicalScorer;

impl LexicalScorer {
    /// Execute a search query over every entity in the graph
    ///
    /// Zero-scoring entities are excluded. Results sort by descending
    /// score; the sort is stable, so equal scores keep dataset order.
    pub fn execute(query: &SearchQuery, graph: &KnowledgeGraph) -> Vec<SearchMatch> {
        let tokens = tokenize(&query.text);
        if tokens.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<SearchMatch> = graph
            .entities()
            .filter_map(|entity| {
                let score = score(entity, &tokens);
                (score > 0).then(|| SearchMatch {
                    entity: entity.clone(),
                    score,
                })
            })
            .collect();

        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(query.top_k);

        tracing::debug!(query = %query.text, matches = matches.len(), "lexical search");
        matches
    }
}
