mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    compile, edit, init, lint, variables, CompileArgs, EditArgs, InitArgs, LintArgs,
    VariablesArgs,
};
use config::Config;
use tracing::Level;

/// Mailblocks CLI - build HTML emails from block documents
#[derive(Parser, Debug)]
#[command(name = "mailblocks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Mailblocks project
    Init(InitArgs),

    /// Compile templates to HTML and variable lists
    Compile(CompileArgs),

    /// List the variables a template uses
    Variables(VariablesArgs),

    /// Check templates for common authoring mistakes
    Lint(LintArgs),

    /// Apply mutations to a template file
    Edit(EditArgs),
}

fn init_logging(verbose: bool, cwd: &str) {
    let level = if verbose {
        Level::DEBUG
    } else {
        Config::load(cwd)
            .ok()
            .and_then(|config| config.log_level.parse().ok())
            .unwrap_or(Level::INFO)
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    init_logging(cli.verbose, &cwd);

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Compile(args) => compile(args, &cwd),
        Command::Variables(args) => variables(args, &cwd),
        Command::Lint(args) => lint(args, &cwd),
        Command::Edit(args) => edit(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
