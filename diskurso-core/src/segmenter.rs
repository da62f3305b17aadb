//! Sentence segmentation by terminator characters
//!
//! Deliberately naive: the input is cut at every terminator, pieces are trimmed
//! and empty pieces are discarded. Abbreviations, decimals and `!`/`?` are not
//! special unless they are configured as terminators.

use serde::{Deserialize, Serialize};

/// Segmenter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmenterConfig {
    /// Characters that end a sentence
    #[serde(default = "default_terminators")]
    pub terminators: Vec<char>,
}

fn default_terminators() -> Vec<char> {
    vec!['.']
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            terminators: default_terminators(),
        }
    }
}

/// Splits raw input into trimmed, non-empty sentences
#[derive(Debug, Clone, Default)]
pub struct SentenceSegmenter {
    config: SegmenterConfig,
}

impl SentenceSegmenter {
    /// Create a segmenter
    pub fn new(config: SegmenterConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Sentences of `text`, in order
    pub fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let terminators = &self.config.terminators;
        text.split(|ch: char| terminators.contains(&ch))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}
