//! # vellum
//!
//! Command-line entry point. See the library crate for an overview.

mod commands;
mod config;

use std::io::IsTerminal;

use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "vellum")]
#[command(about = "Member order linter for Stencil components", long_about = None)]
#[command(version)]
struct Cli {
    /// Print debug logs to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint Stencil component files (default command)
    #[command(visible_alias = "patina")]
    Lint(commands::lint::LintArgs),

    /// Print the JSON Schema of vellum.config.json
    Schema(commands::schema::SchemaArgs),
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Lint(args)) => commands::lint::run(args),
        Some(Commands::Schema(args)) => commands::schema::run(args),
        None => commands::lint::run(commands::lint::LintArgs::default()),
    }
}
