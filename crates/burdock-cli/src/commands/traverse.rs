//! Traverse command

use clap::Args;

use crate::output::{to_json, OutputFormat};
use crate::{AppContext, Cli};
use burdock_core::{format_for_prompt, TraversalEngine, TraversalQuery};

#[derive(Args)]
pub struct TraverseArgs {
    /// Seed entity ids
    #[arg(required = true)]
    pub seeds: Vec<String>,

    /// Maximum traversal depth (default 2)
    #[arg(short = 'd', long)]
    pub depth: Option<u32>,

    /// Print traversal statistics after the results
    #[arg(long)]
    pub stats: bool,
}

pub fn run(args: &TraverseArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let depth = args.depth.or(ctx.config.max_depth).unwrap_or(2);
    let query = TraversalQuery::new(args.seeds.iter().map(String::as_str)).with_depth(depth);
    let result = TraversalEngine::execute(&query, &ctx.graph);

    match OutputFormat::from(cli.format.as_str()) {
        OutputFormat::Json => println!("{}", to_json(&result)),
        OutputFormat::Text => {
            print!("{}", format_for_prompt(&result.contexts));
            if args.stats {
                println!(
                    "Visited {} entities ({} neighbor expansions, max depth {})",
                    result.stats.nodes_visited,
                    result.stats.neighbors_expanded,
                    result.stats.max_depth_reached
                );
            }
        }
    }

    Ok(())
}
