//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::error::CliError;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new marker table
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        self.check_code()?;

        println!("Generating marker table template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Marker table template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Replace the sample markers with the ones for your language");
        println!("2. Validate your table:");
        println!("   diskurso validate --lexicon {}", self.output.display());
        println!("3. Use it for analysis:");
        println!(
            "   diskurso analyze -i input.txt --lexicon {}",
            self.output.display()
        );

        Ok(())
    }

    fn check_code(&self) -> Result<()> {
        let code = &self.language_code;
        let valid = !code.is_empty()
            && code
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !valid {
            return Err(CliError::ConfigError(format!(
                "language code {code:?} must be non-empty ASCII letters, digits, '-' or '_'"
            ))
            .into());
        }
        Ok(())
    }

    /// Generate template table content
    fn generate_template(&self) -> String {
        format!(
            r#"# Discourse marker table for {code}
#
# Entries are matched as whole words/phrases, case-insensitively.
# Multi-word phrases take precedence over their constituent words, so
# "because of this" wins over "because" regardless of where either is listed.

[metadata]
code = "{code}"
name = "Custom Language"

# Markers grouped by category. Category names are free-form and only
# organize the table; every entry splits clauses the same way.
[markers]
coordinating = ["and", "but", "or"]
causal = ["because of this", "because"]
contrast = ["however", "on the other hand"]

# Add more categories as needed:
# temporal = ["then", "after that"]
# conditional = ["if", "unless"]
"#,
            code = self.language_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diskurso_core::MarkerTable;
    use tempfile::TempDir;

    #[test]
    fn test_generated_template_is_a_valid_table() {
        let args = GenerateConfigArgs {
            language_code: "ceb".to_string(),
            output: PathBuf::from("ceb.toml"),
        };

        let table = MarkerTable::from_toml_str(&args.generate_template(), "template").unwrap();
        assert_eq!(table.code(), "ceb");
        assert_eq!(table.len(), 7);
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("ilo.toml");

        let args = GenerateConfigArgs {
            language_code: "ilo".to_string(),
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("code = \"ilo\""));
    }

    #[test]
    fn test_rejects_bad_code() {
        let temp_dir = TempDir::new().unwrap();
        let args = GenerateConfigArgs {
            language_code: "x\" y".to_string(),
            output: temp_dir.path().join("bad.toml"),
        };
        assert!(args.execute().is_err());
        assert!(!temp_dir.path().join("bad.toml").exists());
    }
}
