use super::{find_template_files, resolve};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use mailblocks_linter::{lint_document, Diagnostic, DiagnosticLevel, LintOptions};
use mailblocks_template::FsStore;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct LintArgs {
    /// Template file or directory to lint (defaults to the templates dir)
    pub input: Option<PathBuf>,

    /// Show all diagnostics including info level
    #[arg(short, long)]
    pub all: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct LintTotals {
    pub diagnostics: usize,
    pub errors: usize,
    pub warnings: usize,
    pub files: usize,
}

pub fn lint(args: LintArgs, cwd: &str) -> Result<()> {
    let input = match &args.input {
        Some(path) => resolve(cwd, path),
        None => Config::load(cwd)?.get_templates_dir(cwd),
    };
    let json = args.format == "json";

    if !json {
        println!("🔍 {} Mailblocks Linter", "Starting".green().bold());
        println!("   Input: {}", input.display());
        println!();
    }

    let totals = lint_path(&input, args.all, json)?;

    if !json {
        print_summary(&totals);
    }

    // Exit with error code if there are errors
    if totals.errors > 0 {
        std::process::exit(1);
    }

    Ok(())
}

pub(crate) fn lint_path(input: &Path, verbose: bool, json: bool) -> Result<LintTotals> {
    let files = find_template_files(input)?;
    let mut totals = LintTotals::default();
    let mut report = Vec::new();

    for file in &files {
        let diagnostics = match FsStore::read_record(file) {
            Ok(record) => lint_document(&record.document, LintOptions::default()),
            Err(err) => {
                eprintln!("{} Failed to read {}: {}", "✗".red(), file.display(), err);
                totals.errors += 1;
                continue;
            }
        };

        totals.files += 1;
        totals.diagnostics += diagnostics.len();
        totals.errors += count(&diagnostics, DiagnosticLevel::Error);
        totals.warnings += count(&diagnostics, DiagnosticLevel::Warning);

        if json {
            report.push(serde_json::json!({
                "file": file.display().to_string(),
                "diagnostics": diagnostics,
            }));
        } else {
            print_file(file, &diagnostics, verbose);
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(totals)
}

fn count(diagnostics: &[Diagnostic], level: DiagnosticLevel) -> usize {
    diagnostics.iter().filter(|d| d.level == level).count()
}

fn print_file(file: &Path, diagnostics: &[Diagnostic], verbose: bool) {
    if diagnostics.is_empty() {
        if verbose {
            println!("{} {}", "✓".green(), file.display());
        }
        return;
    }

    println!("{}", file.display());

    for diagnostic in diagnostics {
        let level_str = match diagnostic.level {
            DiagnosticLevel::Error => "error".red().bold(),
            DiagnosticLevel::Warning => "warning".yellow().bold(),
            DiagnosticLevel::Info => "info".blue().bold(),
        };

        if !verbose && diagnostic.level == DiagnosticLevel::Info {
            continue;
        }

        println!(
            "  {} [{}] block {} ({}): {}",
            level_str, diagnostic.rule, diagnostic.index, diagnostic.block_id, diagnostic.message
        );

        if let Some(suggestion) = &diagnostic.suggestion {
            println!("    {} {}", "💡".dimmed(), suggestion.dimmed());
        }
    }

    println!();
}

fn print_summary(totals: &LintTotals) {
    println!(
        "✨ {} Linting complete!",
        if totals.errors > 0 {
            "Done".red().bold()
        } else {
            "Done".green().bold()
        }
    );
    println!("   Files checked: {}", totals.files);
    println!("   Total diagnostics: {}", totals.diagnostics);

    if totals.errors > 0 {
        println!("   {} {}", "Errors:".red(), totals.errors);
    }
    if totals.warnings > 0 {
        println!("   {} {}", "Warnings:".yellow(), totals.warnings);
    }

    if totals.errors == 0 && totals.warnings == 0 {
        println!("   {} No issues found!", "✓".green());
    }
}
