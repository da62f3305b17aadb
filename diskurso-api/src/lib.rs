//! Public API for diskurso
//!
//! This crate wraps the clause splitter, marker extractor and sentiment
//! aggregator from `diskurso-core` behind one entry point and turns their
//! results into serializable reports.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use diskurso_core::{Classifier, MarkerExtractor, MarkerLexicon, SentimentAggregator};
use error::Result;
use std::sync::Arc;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{ClauseReport, Input, MarkerDTO, Metadata, Report, ScoreDTO, SentenceReport, Votes};
pub use error::ApiError;

pub use diskurso_core::{
    Classification, ClassifierError, Distribution, FnClassifier, LexiconError, MarkerOccurrence,
    Sentiment, TrailingMarker,
};

/// Main entry point for clause sentiment analysis
///
/// Cheap to share: the lexicon and classifier live behind `Arc`s and no
/// per-request state is kept.
#[derive(Clone)]
pub struct Analyzer {
    lexicon: Arc<MarkerLexicon>,
    aggregator: SentimentAggregator,
    classifier: Arc<dyn Classifier>,
    config: Config,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("markers", &self.lexicon.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Analyzer {
    /// Create an analyzer with the builtin tables and the rule-based classifier
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create an analyzer with custom configuration and the rule-based classifier
    ///
    /// The classifier uses the configured polarity table, or the embedded one.
    pub fn with_config(config: Config) -> Result<Self> {
        let classifier = config.load_classifier()?;
        Self::build(config, classifier)
    }

    /// Create an analyzer that scores text with `classifier`
    pub fn with_classifier<C>(config: Config, classifier: C) -> Result<Self>
    where
        C: Classifier + 'static,
    {
        Self::build(config, Arc::new(classifier))
    }

    fn build(config: Config, classifier: Arc<dyn Classifier>) -> Result<Self> {
        let lexicon = config.load_lexicon()?;
        let aggregator = SentimentAggregator::with_config(lexicon.clone(), config.aggregator_config());
        log::debug!("analyzer ready with {} markers", lexicon.len());

        Ok(Self {
            lexicon,
            aggregator,
            classifier,
            config,
        })
    }

    /// Analyze input and return the full report
    pub fn analyze(&self, input: Input) -> Result<Report> {
        let start = std::time::Instant::now();

        let text = input.read_text()?;
        let analysis = self.aggregator.analyze(&text, self.classifier.as_ref())?;

        let elapsed = start.elapsed();
        Ok(Report::from_analysis(
            analysis,
            text.len(),
            elapsed.as_millis() as u64,
        ))
    }

    /// Analyze text directly (convenience method)
    pub fn analyze_text(&self, text: &str) -> Result<Report> {
        self.analyze(Input::from_text(text))
    }

    /// Clauses of a single sentence
    pub fn split(&self, sentence: &str) -> Vec<String> {
        self.aggregator.splitter().split(sentence)
    }

    /// Marker occurrences of a single sentence
    pub fn extract(&self, sentence: &str) -> Vec<MarkerOccurrence> {
        self.aggregator.extractor().extract(sentence)
    }

    /// Compiled marker lexicon
    pub fn lexicon(&self) -> &Arc<MarkerLexicon> {
        &self.lexicon
    }

    /// Marker extractor in use
    pub fn extractor(&self) -> &MarkerExtractor {
        self.aggregator.extractor()
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// Convenience functions

/// Analyze text with default configuration
pub fn analyze_text(text: &str) -> Result<Report> {
    Analyzer::new()?.analyze_text(text)
}

/// Analyze a file with default configuration
pub fn analyze_file<P: AsRef<std::path::Path>>(path: P) -> Result<Report> {
    Analyzer::new()?.analyze(Input::from_file(path.as_ref().to_path_buf()))
}
