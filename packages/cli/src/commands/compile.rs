use super::{find_template_files, resolve};
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use mailblocks_template::{finalize_record, validate_name, FinalizedTemplate, FsStore};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Template file or directory (defaults to the configured templates dir)
    pub path: Option<PathBuf>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Emit compact HTML
    #[arg(long)]
    pub compact: bool,
}

pub fn compile(args: CompileArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let source = match &args.path {
        Some(path) => resolve(cwd, path),
        None => config.get_templates_dir(cwd),
    };

    if !source.exists() {
        return Err(anyhow!("Templates path does not exist: {}", source.display()));
    }

    if !args.stdout {
        println!("{}", "🔨 Compiling templates...".bright_blue().bold());
    }

    let files = find_template_files(&source)?;
    if files.is_empty() {
        println!("{}", "⚠️  No templates found".yellow());
        return Ok(());
    }

    let out_dir = match &args.out_dir {
        Some(out) => PathBuf::from(cwd).join(out),
        None => config.get_out_dir(cwd),
    };

    let mut success_count = 0;
    let mut error_count = 0;
    let mut written = HashSet::new();

    for file in &files {
        let display = file.strip_prefix(&source).unwrap_or(file);
        match compile_file(file, &args, &config, &out_dir, &mut written) {
            Ok(output) => {
                success_count += 1;
                if !args.stdout {
                    println!("  {} {} → {}", "✓".green(), display.display(), output);
                }
            }
            Err(e) => {
                error_count += 1;
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    display.display(),
                    e.to_string().red()
                );
            }
        }
    }

    if args.stdout {
        return Ok(());
    }

    println!();
    if error_count == 0 {
        println!(
            "{} Compiled {} templates successfully",
            "✅".green(),
            success_count
        );
    } else {
        println!(
            "{} Compiled {} templates, {} errors",
            "⚠️".yellow(),
            success_count,
            error_count
        );
    }

    Ok(())
}

fn compile_file(
    file: &Path,
    args: &CompileArgs,
    config: &Config,
    out_dir: &Path,
    written: &mut HashSet<String>,
) -> Result<String> {
    let record = FsStore::read_record(file)?;

    let mut options = config.compile_options();
    if args.compact {
        options.pretty = false;
    }
    let finalized = finalize_record(&record, &options);
    tracing::debug!(file = %file.display(), variables = finalized.variables.len(), "compiled");

    if args.stdout {
        println!("{}", finalized.html);
        return Ok("stdout".to_string());
    }

    // Output names come from the record, not the file path
    if !written.insert(record.name().to_string()) {
        return Err(anyhow!(
            "Another template already compiled to '{}'",
            record.name()
        ));
    }

    write_outputs(&finalized, record.name(), out_dir)
}

/// Writes `<name>.html` and `<name>.variables.json`; returns the HTML path
fn write_outputs(finalized: &FinalizedTemplate, name: &str, out_dir: &Path) -> Result<String> {
    validate_name(name)?;
    fs::create_dir_all(out_dir)?;

    let html_file = out_dir.join(format!("{name}.html"));
    fs::write(&html_file, &finalized.html)?;

    let variables_file = out_dir.join(format!("{name}.variables.json"));
    fs::write(&variables_file, serde_json::to_string_pretty(&finalized.variables)?)?;

    Ok(html_file.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{init, InitArgs};
    use mailblocks_model::{Attributes, BlockKind, Document};
    use mailblocks_template::{TemplateMetadata, TemplateRecord, TemplateStore};
    use tempfile::TempDir;

    fn project() -> (TempDir, String) {
        let dir = TempDir::new().unwrap();
        let cwd = dir.path().display().to_string();
        init(
            InitArgs {
                templates_dir: "templates".to_string(),
                name: "welcome".to_string(),
                force: false,
            },
            &cwd,
        )
        .unwrap();
        (dir, cwd)
    }

    fn args() -> CompileArgs {
        CompileArgs {
            path: None,
            stdout: false,
            out_dir: None,
            compact: false,
        }
    }

    #[test]
    fn test_compile_initialized_project() {
        let (dir, cwd) = project();

        compile(args(), &cwd).unwrap();

        let html = fs::read_to_string(dir.path().join("dist/welcome.html")).unwrap();
        assert!(html.contains("<title>Welcome, {{name}}</title>"));

        let variables: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(dir.path().join("dist/welcome.variables.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(variables[0]["name"], "name");
    }

    #[test]
    fn test_compile_uses_record_name_and_out_dir() {
        let (dir, cwd) = project();
        let mut doc = Document::new();
        doc.push_with(BlockKind::Paragraph, Attributes::new().with("text", "{{code}}"));
        FsStore::new(dir.path().join("templates/nested"))
            .save(&TemplateRecord::new(TemplateMetadata::new("reset"), doc))
            .unwrap();

        compile(
            CompileArgs {
                out_dir: Some("build".to_string()),
                compact: true,
                ..args()
            },
            &cwd,
        )
        .unwrap();

        let html = fs::read_to_string(dir.path().join("build/reset.html")).unwrap();
        assert!(!html.contains('\n'));
        assert!(dir.path().join("build/welcome.html").exists());
    }

    #[test]
    fn test_record_name_cannot_escape_out_dir() {
        let (dir, cwd) = project();
        fs::write(
            dir.path().join("templates/a.json"),
            r#"{"name":"../../escaped","document":{"blocks":[]}}"#,
        )
        .unwrap();

        compile(
            CompileArgs {
                out_dir: Some("dist/x".to_string()),
                ..args()
            },
            &cwd,
        )
        .unwrap();

        assert!(!dir.path().join("escaped.html").exists());
        assert!(dir.path().join("dist/x/welcome.html").exists());
    }

    #[test]
    fn test_duplicate_record_names_do_not_overwrite() {
        let (dir, cwd) = project();
        let mut doc = Document::new();
        doc.push_with(BlockKind::Paragraph, Attributes::new().with("text", "{{second}}"));
        FsStore::new(dir.path().join("templates/nested"))
            .save(&TemplateRecord::new(TemplateMetadata::new("welcome"), doc))
            .unwrap();

        compile(args(), &cwd).unwrap();

        // nested/welcome.json sorts first; the top-level welcome.json is skipped
        let html = fs::read_to_string(dir.path().join("dist/welcome.html")).unwrap();
        assert!(html.contains("{{second}}"));
        assert!(!html.contains("{{name}}"));
    }

    #[test]
    fn test_missing_templates_dir() {
        let dir = TempDir::new().unwrap();
        let result = compile(args(), &dir.path().display().to_string());

        assert!(result.is_err());
    }
}
