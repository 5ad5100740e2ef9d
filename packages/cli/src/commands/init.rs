use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use mailblocks_model::Document;
use mailblocks_template::{FsStore, TemplateMetadata, TemplateRecord, TemplateStore};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Templates directory
    #[arg(short, long, default_value = "templates")]
    pub templates_dir: String,

    /// Name of the starter template
    #[arg(short, long, default_value = "welcome")]
    pub name: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing Mailblocks project...".bright_blue().bold()
    );

    let existing = Config::load(cwd).unwrap_or_default();
    let config = Config {
        templates_dir: args.templates_dir.clone(),
        ..existing
    };

    let templates_dir = config.get_templates_dir(cwd);
    if !templates_dir.exists() {
        fs::create_dir_all(&templates_dir)?;
        println!("  {} Created {}/", "✓".green(), args.templates_dir);
    }

    // Starter template
    let mut store = FsStore::new(&templates_dir);
    if !store.path_for(&args.name).exists() {
        let document = match &config.theme {
            Some(theme) => {
                let mut doc = Document::starter();
                doc.set_theme(theme.clone());
                doc
            }
            None => Document::starter(),
        };
        let record = TemplateRecord::new(
            TemplateMetadata::new(&args.name).with_subject("Welcome, {{name}}"),
            document,
        );
        store.save(&record)?;
        println!("  {} Created {}.json", "✓".green(), args.name);
    }

    // Write config file
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}/{}.json", args.templates_dir, args.name);
    println!("  2. Run: mailblocks compile");
    println!("  3. Check output in {}/", config.out_dir);

    Ok(())
}
