//! Burdock CLI - Command line interface for the knowledge-graph retrieval engine

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use burdock_core::{GraphDataset, KnowledgeGraph};
use commands::{completions, context, search, stats, traverse};
use config::Config;

#[derive(Parser)]
#[command(name = "burdock")]
#[command(author, version, about = "Knowledge-graph retrieval for RAG pipelines")]
pub struct Cli {
    /// Path to the graph dataset (JSON)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Output format: text, json
    #[arg(short, long, default_value = "text", global = true)]
    pub format: String,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Resolve the dataset path: flag first, then config file, then the
    /// conventional ./graph_data.json
    pub fn data_path(&self, config: &Config) -> PathBuf {
        self.data
            .clone()
            .or_else(|| config.data_path.clone())
            .unwrap_or_else(|| PathBuf::from("graph_data.json"))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search entities by keyword
    Search(search::SearchArgs),
    /// Show an entity's one-hop context
    Context(context::ContextArgs),
    /// Traverse the graph from seed entities
    Traverse(traverse::TraverseArgs),
    /// Show dataset statistics
    Stats,
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context with the loaded graph
pub struct AppContext {
    pub graph: KnowledgeGraph,
    pub config: Config,
}

impl AppContext {
    pub fn new(cli: &Cli) -> anyhow::Result<Self> {
        let config = Config::load();
        let path = cli.data_path(&config);

        let dataset = GraphDataset::from_path(&path)?;
        let graph = KnowledgeGraph::from_dataset(dataset)?;
        tracing::info!(
            "Loaded {} entities and {} relationships from {}",
            graph.entity_count(),
            graph.relation_count(),
            path.display()
        );

        Ok(Self { graph, config })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting burdock CLI");

    // Completions don't need a dataset
    if let Commands::Completions(args) = &cli.command {
        return completions::run(args);
    }

    let ctx = AppContext::new(&cli)?;

    match &cli.command {
        Commands::Search(args) => search::run(args, &cli, &ctx)?,
        Commands::Context(args) => context::run(args, &cli, &ctx)?,
        Commands::Traverse(args) => traverse::run(args, &cli, &ctx)?,
        Commands::Stats => stats::run(&cli, &ctx)?,
        Commands::Completions(_) => {}
    }

    Ok(())
}
