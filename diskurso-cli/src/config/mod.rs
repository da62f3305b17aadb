//! Configuration module

use anyhow::{Context, Result};
use diskurso_core::TrailingMarker;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration structure
///
/// ```toml
/// [analysis]
/// lexicons = ["markers/cebuano.toml"]
/// sentiment_table = "polarity.toml"
/// include_builtin = true
/// terminators = [".", "!", "?"]
/// trailing_marker = "emit"
///
/// [output]
/// default_format = "json"
/// include_metadata = true
/// ```
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Analysis-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Extra marker table files
    pub lexicons: Vec<PathBuf>,

    /// Use the embedded Tagalog and English tables
    pub include_builtin: bool,

    /// Sentence terminators
    pub terminators: Vec<char>,

    /// Handling of a marker that ends a sentence
    pub trailing_marker: TrailingMarker,

    /// Polarity table replacing the embedded one
    pub sentiment_table: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            lexicons: Vec::new(),
            include_builtin: true,
            terminators: vec!['.'],
            trailing_marker: TrailingMarker::Drop,
            sentiment_table: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Include processing metadata in output
    pub include_metadata: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            include_metadata: false,
        }
    }
}

impl OutputConfig {
    /// Parsed default format
    pub fn format(&self) -> Result<OutputFormat> {
        self.default_format.parse().map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format {:?} (expected text, json or markdown)",
                self.default_format
            ))
            .into()
        })
    }
}

impl CliConfig {
    /// Load a configuration file
    ///
    /// Relative table paths are resolved against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        if let Some(base) = path.parent() {
            let analysis = &mut config.analysis;
            for table in analysis.lexicons.iter_mut().chain(&mut analysis.sentiment_table) {
                if table.is_relative() {
                    *table = base.join(&*table);
                }
            }
        }

        log::debug!("loaded CLI config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert!(config.analysis.include_builtin);
        assert_eq!(config.analysis.terminators, vec!['.']);
        assert_eq!(config.analysis.trailing_marker, TrailingMarker::Drop);
        assert!(matches!(config.output.format().unwrap(), OutputFormat::Text));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("diskurso.toml");
        std::fs::write(
            &path,
            "[analysis]\nlexicons = [\"ceb.toml\"]\nsentiment_table = \"polarity.toml\"\ntrailing_marker = \"attach_to_previous\"\n",
        )
        .unwrap();

        let config = CliConfig::from_file(&path).unwrap();
        assert_eq!(config.analysis.lexicons, vec![dir.path().join("ceb.toml")]);
        assert_eq!(
            config.analysis.sentiment_table,
            Some(dir.path().join("polarity.toml"))
        );
        assert_eq!(
            config.analysis.trailing_marker,
            TrailingMarker::AttachToPrevious
        );
        assert!(config.analysis.include_builtin);
        assert_eq!(config.output.default_format, "text");
    }

    #[test]
    fn test_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[analysis\n").unwrap();

        let err = CliConfig::from_file(&path).unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_unknown_format() {
        let output = OutputConfig {
            default_format: "yaml".to_string(),
            include_metadata: false,
        };
        assert!(output.format().is_err());
    }
}
