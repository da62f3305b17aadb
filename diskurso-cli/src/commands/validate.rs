//! Validate command implementation

use anyhow::Result;
use clap::Args;
use diskurso_core::{lexicon, MarkerLexicon, MarkerTable};
use std::path::PathBuf;

use crate::error::CliError;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the marker table file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub lexicon: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating marker table: {}", self.lexicon.display());

        if !self.lexicon.is_file() {
            return Err(CliError::FileNotFound(self.lexicon.display().to_string()).into());
        }

        let checked = MarkerTable::from_file(&self.lexicon).and_then(|table| {
            let compiled = MarkerLexicon::from_tables(vec![table.clone()])?;
            Ok((table, compiled))
        });

        match checked {
            Ok((table, compiled)) => {
                println!("✓ Marker table is valid!");
                println!("  Language code: {}", table.code());
                println!("  Language name: {}", table.name());
                println!(
                    "  Markers: {} in {} categories",
                    compiled.len(),
                    table.markers.len()
                );

                let shared = shared_with_builtin(&table)?;
                if !shared.is_empty() {
                    println!(
                        "  Already in the builtin tables (ignored when combined): {}",
                        shared.join(", ")
                    );
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Marker table is invalid!");
                println!("  Error: {e}");
                Err(CliError::InvalidLexicon(e.to_string()).into())
            }
        }
    }
}

/// Markers of `table` that a builtin table already declares
fn shared_with_builtin(table: &MarkerTable) -> Result<Vec<String>> {
    let builtin = lexicon::builtin()?;
    Ok(table
        .markers()
        .filter(|m| builtin.language_of(m).is_some())
        .map(str::to_string)
        .collect())
}
