//! Prompt formatting for the language-model collaborator
//!
//! Renders entity contexts into the plain-text block that gets spliced
//! into an LLM prompt by the surrounding RAG system.

use crate::context::EntityContext;
use crate::entity::property_text;
use crate::relation::Direction;

/// Fixed sentinel returned for an empty context list
///
/// Callers treat this exact string as the defined empty-result signal.
pub const NO_RESULTS_MESSAGE: &str = "No relevant information found in the knowledge graph.";

/// Format entity contexts into a readable block for an LLM prompt
///
/// Each context renders as a numbered header, an indented properties
/// block, and an indented relationships block with `->` / `<-` marking
/// the direction.
pub fn format_for_prompt(contexts: &[EntityContext]) -> String {
    if contexts.is_empty() {
        return NO_RESULTS_MESSAGE.to_string();
    }

    let mut formatted = String::from("Knowledge Graph Information:\n\n");

    for (index, context) in contexts.iter().enumerate() {
        let entity = &context.entity;
        formatted.push_str(&format!(
            "Entity #{}: {} ({})\n",
            index + 1,
            entity.name,
            entity.entity_type
        ));

        if !entity.properties.is_empty() {
            formatted.push_str("  Properties:\n");
            for (key, value) in &entity.properties {
                formatted.push_str(&format!("    - {}: {}\n", key, property_text(value)));
            }
        }

        if !context.relationships.is_empty() {
            formatted.push_str("  Relationships:\n");
            for view in &context.relationships {
                let arrow = match view.direction {
                    Direction::Outgoing => "->",
                    Direction::Incoming => "<-",
                };
                formatted.push_str(&format!(
                    "    - {} {} {} ({})\n",
                    view.relation_type, arrow, view.neighbor.name, view.neighbor.entity_type
                ));
                for (key, value) in &view.properties {
                    formatted.push_str(&format!("      {}: {}\n", key, property_text(value)));
                }
            }
        }

        formatted.push('\n');
    }

    formatted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::GraphDataset;
    use crate::entity::Entity;
    use crate::graph::KnowledgeGraph;
    use crate::relation::Relation;

    #[test]
    fn test_empty_contexts_format_to_sentinel() {
        assert_eq!(
            format_for_prompt(&[]),
            "No relevant information found in the knowledge graph."
        );
    }

    #[test]
    fn test_full_rendering() {
        let dataset = GraphDataset::new()
            .with_entity(
                Entity::new("python", "Python", "language")
                    .with_property("paradigm", "multi-paradigm"),
            )
            .with_entity(Entity::new("django", "Django", "framework"))
            .with_relationship(
                Relation::new("r1", "django", "python", "written_in")
                    .with_property("since", "0.9"),
            );
        let graph = KnowledgeGraph::from_dataset(dataset).unwrap();

        let contexts = vec![graph.context("python").unwrap()];
        let text = format_for_prompt(&contexts);

        assert_eq!(
            text,
            "Knowledge Graph Information:\n\n\
             Entity #1: Python (language)\n\
             \x20 Properties:\n\
             \x20   - paradigm: multi-paradigm\n\
             \x20 Relationships:\n\
             \x20   - written_in <- Django (framework)\n\
             \x20     since: 0.9\n\n"
        );
    }

    #[test]
    fn test_entities_are_numbered() {
        let dataset = GraphDataset::new()
            .with_entity(Entity::new("a", "A", "node"))
            .with_entity(Entity::new("b", "B", "node"));
        let graph = KnowledgeGraph::from_dataset(dataset).unwrap();

        let contexts = vec![graph.context("a").unwrap(), graph.context("b").unwrap()];
        let text = format_for_prompt(&contexts);

        assert!(text.contains("Entity #1: A (node)"));
        assert!(text.contains("Entity #2: B (node)"));
    }

    #[test]
    fn test_scalar_properties_render_bare() {
        let dataset = GraphDataset::new().with_entity(
            Entity::new("rust", "Rust", "language")
                .with_property("year", 2015)
                .with_property("stable", true),
        );
        let graph = KnowledgeGraph::from_dataset(dataset).unwrap();

        let text = format_for_prompt(&[graph.context("rust").unwrap()]);
        assert!(text.contains("    - year: 2015\n"));
        assert!(text.contains("    - stable: true\n"));
    }

    #[test]
    fn test_blocks_omitted_when_empty() {
        let dataset = GraphDataset::new().with_entity(Entity::new("a", "A", "node"));
        let graph = KnowledgeGraph::from_dataset(dataset).unwrap();

        let text = format_for_prompt(&[graph.context("a").unwrap()]);
        assert!(!text.contains("Properties:"));
        assert!(!text.contains("Relationships:"));
    }
}
