//! Value types shared across the pipeline

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClassifierError;

/// Sentiment label drawn from the closed set {positive, neutral, negative}
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Positive sentiment
    Positive,
    /// Neither positive nor negative
    Neutral,
    /// Negative sentiment
    Negative,
}

impl Sentiment {
    /// All labels in tie-break order
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// Lowercase label name
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Sentiment::Positive => 0,
            Sentiment::Neutral => 1,
            Sentiment::Negative => 2,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = ClassifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "neutral" => Ok(Sentiment::Neutral),
            "negative" => Ok(Sentiment::Negative),
            _ => Err(ClassifierError::UnknownLabel(s.to_string())),
        }
    }
}

/// Probability distribution over the three labels
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    /// Probability of positive
    pub positive: f64,
    /// Probability of neutral
    pub neutral: f64,
    /// Probability of negative
    pub negative: f64,
}

impl Distribution {
    /// Create a distribution from raw probabilities
    pub fn new(positive: f64, neutral: f64, negative: f64) -> Self {
        Self {
            positive,
            neutral,
            negative,
        }
    }

    /// All mass on a single label
    pub fn certain(label: Sentiment) -> Self {
        let mut probs = [0.0; 3];
        probs[label.index()] = 1.0;
        Self::new(probs[0], probs[1], probs[2])
    }

    /// Probability assigned to `label`
    pub fn get(&self, label: Sentiment) -> f64 {
        match label {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    /// Label with the highest probability; ties go to the earlier label in
    /// [`Sentiment::ALL`]
    pub fn argmax(&self) -> Sentiment {
        let mut best = Sentiment::Positive;
        for label in Sentiment::ALL {
            if self.get(label) > self.get(best) {
                best = label;
            }
        }
        best
    }
}

impl Default for Distribution {
    fn default() -> Self {
        Self::certain(Sentiment::Neutral)
    }
}

/// A label together with its probability distribution
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Predicted label
    pub label: Sentiment,
    /// Probability per label
    pub distribution: Distribution,
}

impl Classification {
    /// Create a classification
    pub fn new(label: Sentiment, distribution: Distribution) -> Self {
        Self {
            label,
            distribution,
        }
    }

    /// Classification whose label is the argmax of `distribution`
    pub fn from_distribution(distribution: Distribution) -> Self {
        Self::new(distribution.argmax(), distribution)
    }

    /// Classification that puts all probability on `label`
    pub fn certain(label: Sentiment) -> Self {
        Self::new(label, Distribution::certain(label))
    }
}

/// A discourse marker found in a sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerOccurrence {
    /// Marker text as written in the source (case preserved)
    pub text: String,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    /// Code of the table that declared the marker (`tl`, `en`, ...)
    pub language: String,
}

impl MarkerOccurrence {
    /// Marker text
    pub fn as_str(&self) -> &str {
        &self.text
    }
}
