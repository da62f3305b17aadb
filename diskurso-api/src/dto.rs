//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use diskurso_core::{Analysis, Distribution, MarkerOccurrence, Sentiment, VoteTally};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for analysis
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => {
                let bytes = fs::read(&path).map_err(ApiError::Io)?;
                String::from_utf8(bytes).map_err(ApiError::Utf8)
            }
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }
}

/// A discourse marker found in a sentence
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkerDTO {
    /// Marker text as written
    pub text: String,
    /// Language code of the table that declared it
    pub language: String,
    /// Byte offset within the sentence
    pub start: usize,
    /// End byte offset within the sentence
    pub end: usize,
}

impl From<MarkerOccurrence> for MarkerDTO {
    fn from(occurrence: MarkerOccurrence) -> Self {
        Self {
            text: occurrence.text,
            language: occurrence.language,
            start: occurrence.start,
            end: occurrence.end,
        }
    }
}

/// Label plus label probabilities
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreDTO {
    /// Winning label
    pub label: String,
    /// Probability of positive
    pub positive: f64,
    /// Probability of neutral
    pub neutral: f64,
    /// Probability of negative
    pub negative: f64,
}

impl ScoreDTO {
    fn new(label: Sentiment, distribution: Distribution) -> Self {
        Self {
            label: label.to_string(),
            positive: distribution.positive,
            neutral: distribution.neutral,
            negative: distribution.negative,
        }
    }
}

/// One clause and its score
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClauseReport {
    /// Clause text
    pub text: String,
    /// Clause score
    pub sentiment: ScoreDTO,
}

/// Everything reported for one sentence
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SentenceReport {
    /// Sentence text without its terminator
    pub text: String,
    /// Sentence-level score
    pub sentiment: ScoreDTO,
    /// Discourse markers in order of appearance
    pub markers: Vec<MarkerDTO>,
    /// Clauses in order
    pub clauses: Vec<ClauseReport>,
}

/// Clause votes per label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Votes {
    /// Positive clauses
    pub positive: usize,
    /// Neutral clauses
    pub neutral: usize,
    /// Negative clauses
    pub negative: usize,
}

impl From<VoteTally> for Votes {
    fn from(tally: VoteTally) -> Self {
        Self {
            positive: tally.positive,
            neutral: tally.neutral,
            negative: tally.negative,
        }
    }
}

/// Processing metadata with runtime statistics
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Total bytes processed
    pub total_bytes: usize,
    /// Number of sentences
    pub sentence_count: usize,
    /// Number of clauses across all sentences
    pub clause_count: usize,
    /// Number of marker occurrences across all sentences
    pub marker_count: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Complete analysis report
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    /// Per-sentence results
    pub sentences: Vec<SentenceReport>,
    /// Clause votes across all sentences
    pub votes: Votes,
    /// Majority clause label; `None` when no clause was classified
    pub overall: Option<String>,
    /// Processing metadata
    pub metadata: Metadata,
}

impl Report {
    pub(crate) fn from_analysis(analysis: Analysis, total_bytes: usize, elapsed_ms: u64) -> Self {
        let metadata = Metadata {
            total_bytes,
            sentence_count: analysis.sentences.len(),
            clause_count: analysis.clause_count(),
            marker_count: analysis.marker_count(),
            processing_time_ms: elapsed_ms,
        };

        let sentences = analysis
            .sentences
            .into_iter()
            .map(|sentence| SentenceReport {
                text: sentence.text,
                sentiment: ScoreDTO::new(
                    sentence.classification.label,
                    sentence.classification.distribution,
                ),
                markers: sentence.markers.into_iter().map(MarkerDTO::from).collect(),
                clauses: sentence
                    .clauses
                    .into_iter()
                    .map(|clause| ClauseReport {
                        sentiment: ScoreDTO::new(
                            clause.classification.label,
                            clause.classification.distribution,
                        ),
                        text: clause.text,
                    })
                    .collect(),
            })
            .collect();

        Self {
            sentences,
            votes: analysis.tally.into(),
            overall: analysis.verdict.map(|label| label.to_string()),
            metadata,
        }
    }

    /// Serialize the report to pretty-printed JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(ApiError::Serde)
    }
}
