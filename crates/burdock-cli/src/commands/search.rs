//! Search command

use clap::Args;

use crate::output::{to_json, OutputFormat};
use crate::{AppContext, Cli};
use burdock_core::{format_for_prompt, EntityContext, LexicalScorer, SearchQuery};

#[derive(Args)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Maximum number of results (default 5)
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,

    /// Render the one-hop context of each match as prompt text
    #[arg(long)]
    pub with_context: bool,
}

pub fn run(args: &SearchArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let top_k = args.top_k.or(ctx.config.top_k).unwrap_or(5);
    let query = SearchQuery::new(&args.query).with_top_k(top_k);
    let matches = LexicalScorer::execute(&query, &ctx.graph);

    tracing::info!("Search returned {} results", matches.len());

    match OutputFormat::from(cli.format.as_str()) {
        OutputFormat::Json => println!("{}", to_json(&matches)),
        OutputFormat::Text => {
            if matches.is_empty() {
                println!("No matches for '{}'", args.query);
            } else if args.with_context {
                let contexts: Vec<EntityContext> = matches
                    .iter()
                    .filter_map(|m| ctx.graph.context(m.entity.id.as_str()))
                    .collect();
                print!("{}", format_for_prompt(&contexts));
            } else {
                println!(
                    "Search results for '{}' ({} found):",
                    args.query,
                    matches.len()
                );
                for m in &matches {
                    println!(
                        "  {} ({}) [score {}]",
                        m.entity.name, m.entity.entity_type, m.score
                    );
                }
            }
        }
    }

    Ok(())
}
