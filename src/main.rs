//! CLI entry point for validate.

mod cli;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use cli::Cli;
use docset::output::{quiet_from_env, Output, OutputMode};
use docset::paths::resolve_base_path;
use docset::validation::validate;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let base_path = resolve_base_path(cli.path.as_deref())?;
    let result = validate(&base_path)?;

    let mode = OutputMode::from_flags(cli.json, cli.quiet || quiet_from_env());
    Output::new(mode).report(&result);

    if result.failed() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
