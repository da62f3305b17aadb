//! Discourse-aware clause segmentation and sentiment aggregation for Taglish
//!
//! Mixed Tagalog-English text is cut into sentences, each sentence is cut into
//! clauses at discourse markers ("pero", "dahil sa", "but", "because of
//! this", ...) and secondary punctuation, and every clause is classified. The
//! clause labels are tallied into one overall verdict.
//!
//! # Architecture
//!
//! - [`lexicon`]: language-tagged marker tables compiled into one matcher
//! - [`segmenter`]: sentence segmentation on terminator characters
//! - [`splitter`]: clause segmentation with leading-marker reattachment
//! - [`extractor`]: ordered marker occurrences for display
//! - [`classifier`]: the `Classifier` contract and a rule-based implementation
//! - [`aggregator`]: per-sentence analysis and the clause vote tally
//!
//! # Example
//!
//! ```rust
//! use diskurso_core::{lexicon, PolarityClassifier, Sentiment, SentimentAggregator};
//!
//! let aggregator = SentimentAggregator::new(lexicon::builtin().unwrap());
//! let classifier = PolarityClassifier::builtin().unwrap();
//!
//! let analysis = aggregator
//!     .analyze("Masaya ako, pero pagod na ako.", &classifier)
//!     .unwrap();
//!
//! let clauses: Vec<&str> = analysis.sentences[0]
//!     .clauses
//!     .iter()
//!     .map(|c| c.text.as_str())
//!     .collect();
//! assert_eq!(clauses, vec!["Masaya ako", "pero pagod na ako"]);
//! assert_eq!(analysis.verdict, Some(Sentiment::Positive));
//! ```

#![warn(missing_docs)]

pub mod aggregator;
pub mod classifier;
pub mod error;
pub mod extractor;
pub mod lexicon;
pub mod segmenter;
pub mod splitter;
pub mod types;

pub use aggregator::{
    AggregatorConfig, Analysis, ClauseAnalysis, SentenceAnalysis, SentimentAggregator, VoteTally,
};
pub use classifier::{Classifier, FnClassifier, PolarityClassifier, PolarityTable};
pub use error::{ClassifierError, LexiconError};
pub use extractor::MarkerExtractor;
pub use lexicon::{MarkerLexicon, MarkerLexiconBuilder, MarkerTable};
pub use segmenter::{SegmenterConfig, SentenceSegmenter};
pub use splitter::{ClauseSplitter, SplitterConfig, TrailingMarker};
pub use types::{Classification, Distribution, MarkerOccurrence, Sentiment};
