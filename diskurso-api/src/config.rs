//! High-level configuration API

use crate::error::{ApiError, Result};
use diskurso_core::{
    AggregatorConfig, MarkerLexicon, MarkerTable, PolarityClassifier, PolarityTable,
    SegmenterConfig, SplitterConfig, TrailingMarker,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// High-level configuration for analysis
#[derive(Debug, Clone)]
pub struct Config {
    lexicon_files: Vec<PathBuf>,
    include_builtin: bool,
    terminators: Vec<char>,
    trailing_marker: TrailingMarker,
    sentiment_table: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lexicon_files: Vec::new(),
            include_builtin: true,
            terminators: SegmenterConfig::default().terminators,
            trailing_marker: TrailingMarker::default(),
            sentiment_table: None,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Extra marker table files, in precedence order after the builtin tables
    pub fn lexicon_files(&self) -> &[PathBuf] {
        &self.lexicon_files
    }

    /// Whether the embedded Tagalog and English tables are used
    pub fn include_builtin(&self) -> bool {
        self.include_builtin
    }

    /// Sentence terminators
    pub fn terminators(&self) -> &[char] {
        &self.terminators
    }

    /// Handling of a sentence-final marker
    pub fn trailing_marker(&self) -> TrailingMarker {
        self.trailing_marker
    }

    /// Polarity table replacing the embedded one, if any
    pub fn sentiment_table(&self) -> Option<&Path> {
        self.sentiment_table.as_deref()
    }

    /// Rule-based classifier over the configured polarity table
    pub fn load_classifier(&self) -> Result<Arc<PolarityClassifier>> {
        match &self.sentiment_table {
            Some(path) => {
                log::debug!("loading polarity table from {}", path.display());
                let table = PolarityTable::from_file(path)?;
                Ok(Arc::new(PolarityClassifier::from_table(&table)))
            }
            None => Ok(PolarityClassifier::builtin()?),
        }
    }

    /// Load and compile the configured marker tables
    ///
    /// Without extra files this is the shared builtin lexicon.
    pub fn load_lexicon(&self) -> Result<Arc<MarkerLexicon>> {
        if self.include_builtin && self.lexicon_files.is_empty() {
            return Ok(diskurso_core::lexicon::builtin()?);
        }

        let mut builder = MarkerLexicon::builder();
        if self.include_builtin {
            builder = builder.builtin_tables()?;
        }
        for path in &self.lexicon_files {
            log::debug!("loading marker table from {}", path.display());
            builder = builder.table(MarkerTable::from_file(path)?);
        }

        Ok(Arc::new(builder.build()?))
    }

    pub(crate) fn aggregator_config(&self) -> AggregatorConfig {
        AggregatorConfig {
            segmenter: SegmenterConfig {
                terminators: self.terminators.clone(),
            },
            splitter: SplitterConfig {
                trailing_marker: self.trailing_marker,
            },
        }
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Add a marker table file
    pub fn lexicon_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.lexicon_files.push(path.into());
        self
    }

    /// Use or skip the embedded tables
    pub fn include_builtin(mut self, include: bool) -> Self {
        self.config.include_builtin = include;
        self
    }

    /// Set the sentence terminators
    pub fn terminators(mut self, terminators: impl IntoIterator<Item = char>) -> Self {
        self.config.terminators = terminators.into_iter().collect();
        self
    }

    /// Set the trailing marker policy
    pub fn trailing_marker(mut self, policy: TrailingMarker) -> Self {
        self.config.trailing_marker = policy;
        self
    }

    /// Score clauses with a polarity table file instead of the embedded one
    pub fn sentiment_table(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.sentiment_table = Some(path.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if !self.config.include_builtin && self.config.lexicon_files.is_empty() {
            return Err(ApiError::Config(
                "builtin tables disabled and no marker table files given".to_string(),
            ));
        }

        if self.config.terminators.is_empty() {
            return Err(ApiError::Config(
                "at least one sentence terminator required".to_string(),
            ));
        }

        if let Some(ch) = self.config.terminators.iter().find(|c| c.is_whitespace()) {
            return Err(ApiError::Config(format!(
                "whitespace terminator {ch:?} is not allowed"
            )));
        }

        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.include_builtin());
        assert_eq!(config.terminators(), &['.']);
        assert_eq!(config.trailing_marker(), TrailingMarker::Drop);
        assert!(config.lexicon_files().is_empty());
        assert!(config.sentiment_table().is_none());
    }

    #[test]
    fn test_missing_sentiment_table() {
        let config = Config::builder()
            .sentiment_table("/nonexistent/sentiment.toml")
            .build()
            .unwrap();
        assert!(matches!(
            config.load_classifier(),
            Err(ApiError::Lexicon(diskurso_core::LexiconError::Read { .. }))
        ));
    }

    #[test]
    fn test_builder_validation() {
        assert!(matches!(
            Config::builder().include_builtin(false).build(),
            Err(ApiError::Config(_))
        ));
        assert!(matches!(
            Config::builder().terminators(Vec::new()).build(),
            Err(ApiError::Config(_))
        ));
        assert!(matches!(
            Config::builder().terminators(['.', ' ']).build(),
            Err(ApiError::Config(_))
        ));
    }

    #[test]
    fn test_builtin_lexicon_is_shared() {
        let a = Config::default().load_lexicon().unwrap();
        let b = Config::default().load_lexicon().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
