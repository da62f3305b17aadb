//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod analyze;
pub mod generate_config;
pub mod list;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text into clauses and tally clause sentiment
    Analyze(analyze::AnalyzeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a marker table file
    Validate(validate::ValidateArgs),

    /// Generate a marker table template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the builtin discourse markers
    Markers {
        /// Only show the table with this language code (tl, en)
        #[arg(short, long, value_name = "CODE")]
        language: Option<String>,
    },

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::List { subcommand } => match subcommand {
                ListCommands::Markers { language } => list::markers(language.as_deref()),
                ListCommands::Formats => list::formats(),
            },
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}
