//! diskurso command-line entry point

use clap::Parser;
use diskurso_cli::commands::Commands;

/// Discourse-aware clause sentiment analysis for Taglish text
#[derive(Debug, Parser)]
#[command(name = "diskurso", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
