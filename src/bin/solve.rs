use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use plant_inspection::{input, CLIArgs, TunnelGraph};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let plan = match &args.input_path {
        Some(path) => input::read_plan(path).with_context(|| {
            format!(
                "Failed to read inspection plan in given file({}).",
                path.display()
            )
        })?,
        None => input::parse_plan(io::stdin().lock())
            .context("Failed to read inspection plan from standard input.")?,
    };

    let graph = TunnelGraph::new(plan.buildings());
    println!("{}", graph.drives_needed(plan.inspect_ids()));

    Ok(())
}
