//! Sentence- and clause-level sentiment aggregation
//!
//! For every sentence the aggregator records the sentence classification, the
//! discourse markers and the classification of each clause. Clause labels are
//! tallied across the whole input and the most voted label is the verdict.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::classifier::Classifier;
use crate::error::ClassifierError;
use crate::extractor::MarkerExtractor;
use crate::lexicon::MarkerLexicon;
use crate::segmenter::{SegmenterConfig, SentenceSegmenter};
use crate::splitter::{ClauseSplitter, SplitterConfig};
use crate::types::{Classification, MarkerOccurrence, Sentiment};

/// Clause-level vote counts for one request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    /// Positive clause votes
    pub positive: usize,
    /// Neutral clause votes
    pub neutral: usize,
    /// Negative clause votes
    pub negative: usize,
}

impl VoteTally {
    /// Count one vote
    pub fn record(&mut self, label: Sentiment) {
        match label {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }

    /// Votes for `label`
    pub fn get(&self, label: Sentiment) -> usize {
        match label {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    /// Total votes cast
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// Most voted label, first maximum in positive, neutral, negative order;
    /// `None` when nothing was counted
    pub fn verdict(&self) -> Option<Sentiment> {
        if self.total() == 0 {
            return None;
        }

        let mut best = Sentiment::Positive;
        for label in Sentiment::ALL {
            if self.get(label) > self.get(best) {
                best = label;
            }
        }
        Some(best)
    }
}

/// A clause and its classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClauseAnalysis {
    /// Clause text
    pub text: String,
    /// Clause classification
    pub classification: Classification,
}

/// Everything recorded for one sentence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceAnalysis {
    /// Trimmed sentence text
    pub text: String,
    /// Sentence-level classification
    pub classification: Classification,
    /// Discourse markers in order of appearance
    pub markers: Vec<MarkerOccurrence>,
    /// Clauses in sentence order
    pub clauses: Vec<ClauseAnalysis>,
}

/// Result of analyzing one input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Per-sentence results
    pub sentences: Vec<SentenceAnalysis>,
    /// Clause votes across all sentences
    pub tally: VoteTally,
    /// Overall label; absent when no clause was classified
    pub verdict: Option<Sentiment>,
}

impl Analysis {
    /// Number of clauses across all sentences
    pub fn clause_count(&self) -> usize {
        self.sentences.iter().map(|s| s.clauses.len()).sum()
    }

    /// Number of marker occurrences across all sentences
    pub fn marker_count(&self) -> usize {
        self.sentences.iter().map(|s| s.markers.len()).sum()
    }
}

/// Aggregator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregatorConfig {
    /// Sentence segmentation
    #[serde(default)]
    pub segmenter: SegmenterConfig,
    /// Clause splitting
    #[serde(default)]
    pub splitter: SplitterConfig,
}

/// Runs segmentation, extraction, splitting and classification
///
/// Holds only read-only state, so one instance can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct SentimentAggregator {
    segmenter: SentenceSegmenter,
    splitter: ClauseSplitter,
    extractor: MarkerExtractor,
}

impl SentimentAggregator {
    /// Create an aggregator with the default configuration
    pub fn new(lexicon: Arc<MarkerLexicon>) -> Self {
        Self::with_config(lexicon, AggregatorConfig::default())
    }

    /// Create an aggregator with an explicit configuration
    pub fn with_config(lexicon: Arc<MarkerLexicon>, config: AggregatorConfig) -> Self {
        Self {
            segmenter: SentenceSegmenter::new(config.segmenter),
            splitter: ClauseSplitter::with_config(lexicon.clone(), config.splitter),
            extractor: MarkerExtractor::new(lexicon),
        }
    }

    /// Clause splitter in use
    pub fn splitter(&self) -> &ClauseSplitter {
        &self.splitter
    }

    /// Marker extractor in use
    pub fn extractor(&self) -> &MarkerExtractor {
        &self.extractor
    }

    /// Analyze `raw_input`; classifier errors are returned unchanged
    pub fn analyze<C>(&self, raw_input: &str, classifier: &C) -> Result<Analysis, ClassifierError>
    where
        C: Classifier + ?Sized,
    {
        let mut tally = VoteTally::default();
        let mut sentences = Vec::new();

        for sentence in self.segmenter.segment(raw_input) {
            let classification = classifier.classify(sentence)?;
            let markers = self.extractor.extract(sentence);

            let mut clauses = Vec::new();
            for clause in self.splitter.split(sentence) {
                let clause_classification = classifier.classify(&clause)?;
                tally.record(clause_classification.label);
                clauses.push(ClauseAnalysis {
                    text: clause,
                    classification: clause_classification,
                });
            }

            if clauses.is_empty() {
                log::debug!("sentence {sentence:?} produced no clauses");
            }

            sentences.push(SentenceAnalysis {
                text: sentence.to_string(),
                classification,
                markers,
                clauses,
            });
        }

        log::debug!(
            "analyzed {} sentences, {} clause votes",
            sentences.len(),
            tally.total()
        );

        Ok(Analysis {
            sentences,
            verdict: tally.verdict(),
            tally,
        })
    }
}
