//! Trivia CLI - renders trivia documents to static HTML.
//!
//! Usage:
//! - `trivia <INPUT> <OUTPUT>`: validate a document and render it
//! - `trivia validate <INPUT>`: validate a document without rendering
//! - `trivia check-schema`: check the schema against its meta-schema

mod artifact;
mod commands;
mod error;
mod output;
mod pipeline;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RenderArgs, ValidateArgs};
use output::Output;
use pipeline::SettingsArgs;

/// Trivia - render a round of trivia to HTML.
#[derive(Parser)]
#[command(name = "trivia", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    render: RenderArgs,

    #[command(flatten)]
    settings: SettingsArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a trivia document.
    Validate(ValidateArgs),
    /// Check the schema itself.
    CheckSchema,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.settings.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Some(Commands::Validate(args)) => args.execute(&cli.settings),
        Some(Commands::CheckSchema) => commands::check_schema::execute(&cli.settings),
        None => cli.render.execute(&cli.settings),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        match err.report_json() {
            Some(Ok(json)) => output.info(&json),
            Some(Err(e)) => output.error(&format!("Failed to serialize report: {e}")),
            None => {}
        }
        std::process::exit(1);
    }
}
