mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{init, palette, render, validate, InitArgs, PaletteArgs, RenderArgs, ValidateArgs};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Pagecraft CLI - inspect and publish page builder documents
#[derive(Parser, Debug)]
#[command(name = "pagecraft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Show debug logs (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a config file and a starter page
    Init(InitArgs),

    /// Check stored documents against the component schemas
    Validate(ValidateArgs),

    /// Render a document to HTML
    Render(RenderArgs),

    /// List the component palette
    Palette(PaletteArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd: PathBuf = std::env::current_dir()?;

    match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Validate(args) => validate(args, &cwd),
        Command::Render(args) => render(args, &cwd),
        Command::Palette(args) => palette(args, &cwd),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
