use std::{io, process};

use anyhow::{Context, Result};
use clap::Parser;
use plant_inspection::{input, CLIArgs};

// Checker convention: exit code 42 marks accepted input, anything else is a
// rejection with the violated constraint on stderr.
fn main() -> Result<()> {
    let args = CLIArgs::parse();
    match &args.input_path {
        Some(path) => input::read_plan(path).with_context(|| {
            format!(
                "Failed to validate inspection plan in given file({}).",
                path.display()
            )
        })?,
        None => input::parse_plan(io::stdin().lock())
            .context("Failed to validate inspection plan from standard input.")?,
    };

    process::exit(42)
}
