//! Context command

use clap::Args;

use crate::output::{to_json, OutputFormat};
use crate::{AppContext, Cli};
use burdock_core::format_for_prompt;

#[derive(Args)]
pub struct ContextArgs {
    /// Entity id
    pub id: String,
}

pub fn run(args: &ContextArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    match ctx.graph.context(&args.id) {
        Some(context) => match OutputFormat::from(cli.format.as_str()) {
            OutputFormat::Json => println!("{}", to_json(&context)),
            OutputFormat::Text => {
                print!("{}", format_for_prompt(std::slice::from_ref(&context)));
            }
        },
        None => println!("Entity not found: {}", args.id),
    }

    Ok(())
}
