use super::resolve;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use mailblocks_editor::{EditEffect, EditSession, Mutation};
use mailblocks_template::FsStore;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Template file to edit in place
    pub file: PathBuf,

    /// Mutation as JSON, e.g. '{"insert":{"kind":"button"}}'. Repeat to
    /// apply several in order, or pass a JSON array.
    #[arg(short, long = "mutation", required = true)]
    pub mutations: Vec<String>,

    /// Print the result instead of writing the file
    #[arg(long)]
    pub dry_run: bool,
}

pub fn edit(args: EditArgs, cwd: &str) -> Result<()> {
    let path = resolve(cwd, &args.file);
    let mut record = FsStore::read_record(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mutations = parse_mutations(&args.mutations)?;
    let mut session = EditSession::new(record.name().to_string(), record.document.clone());

    // All or nothing: the file is only written when every mutation applied
    for mutation in &mutations {
        let effect = session
            .apply(mutation)
            .with_context(|| format!("Mutation '{}' failed", mutation.name()))?;
        println!("  {} {}", "✓".green(), describe_effect(mutation, &effect));
    }

    record.document = session.document().clone();

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    FsStore::write_record(&path, &record)?;
    println!(
        "{} Applied {} mutation(s) to {}",
        "✅".green(),
        mutations.len(),
        path.display()
    );

    Ok(())
}

/// Each argument is a single mutation object or an array of them
fn parse_mutations(raw: &[String]) -> Result<Vec<Mutation>> {
    let mut mutations = Vec::new();
    for text in raw {
        let value: serde_json::Value =
            serde_json::from_str(text).with_context(|| format!("Invalid JSON: {text}"))?;

        if value.is_array() {
            let batch: Vec<Mutation> = serde_json::from_value(value)
                .with_context(|| format!("Invalid mutation list: {text}"))?;
            mutations.extend(batch);
        } else {
            let mutation: Mutation = serde_json::from_value(value)
                .with_context(|| format!("Invalid mutation: {text}"))?;
            mutations.push(mutation);
        }
    }
    Ok(mutations)
}

fn describe_effect(mutation: &Mutation, effect: &EditEffect) -> String {
    match effect {
        EditEffect::Inserted { index, id } => format!("{} → {id} at {index}", mutation.describe()),
        EditEffect::Updated { id, .. } => format!("Updated {id}"),
        EditEffect::Moved { from, to } => format!("Moved block {from} → {to}"),
        EditEffect::Duplicated { source, id, .. } => format!("Duplicated block {source} as {id}"),
        EditEffect::Removed { id, .. } => format!("Removed {id}"),
        EditEffect::ThemeChanged => "Theme updated".to_string(),
        EditEffect::Unchanged => format!("{} (no change)", mutation.describe().dimmed()),
    }
}
