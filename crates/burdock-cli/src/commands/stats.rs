//! Stats command

use crate::output::{to_json, OutputFormat};
use crate::{AppContext, Cli};

pub fn run(cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let graph = &ctx.graph;

    match OutputFormat::from(cli.format.as_str()) {
        OutputFormat::Json => {
            println!(
                "{}",
                to_json(&serde_json::json!({
                    "entities": graph.entity_count(),
                    "relationships": graph.relation_count(),
                    "entity_types": graph.entity_types(),
                    "relation_types": graph.relation_types(),
                }))
            );
        }
        OutputFormat::Text => {
            println!("Entities: {}", graph.entity_count());
            println!("Relationships: {}", graph.relation_count());
            println!(
                "Entity types: {}",
                graph.entity_types().into_iter().collect::<Vec<_>>().join(", ")
            );
            println!(
                "Relationship types: {}",
                graph.relation_types().into_iter().collect::<Vec<_>>().join(", ")
            );
        }
    }

    Ok(())
}
