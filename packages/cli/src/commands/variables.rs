use super::resolve;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use mailblocks_template::{finalize_record, FsStore};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct VariablesArgs {
    /// Template file
    pub file: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn variables(args: VariablesArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let record = FsStore::read_record(&resolve(cwd, &args.file))?;
    let finalized = finalize_record(&record, &config.compile_options());

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&finalized.variables)?);
        return Ok(());
    }

    if finalized.variables.is_empty() {
        println!("{} {} uses no variables", "✓".green(), record.name());
        return Ok(());
    }

    println!("{} ({})", record.name().bold(), finalized.variables.len());
    for variable in &finalized.variables {
        println!("  {}", variable.token().cyan());
    }

    Ok(())
}
