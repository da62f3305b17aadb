//! Rule-based classifier over a bilingual polarity lexicon
//!
//! Scores a text as the mean signed weight of its polarity words, with simple
//! negation and intensifier handling, then maps the score to a distribution.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::{Arc, OnceLock};

use super::Classifier;
use crate::error::{ClassifierError, LexiconError, Result};
use crate::lexicon::config::Metadata;
use crate::types::{Classification, Distribution};

const BUILTIN_TABLE: &str = include_str!("../../configs/sentiment.toml");

/// Tokens a negator stays active for
const NEGATION_WINDOW: usize = 3;
/// Negated words flip sign and lose half their weight
const NEGATION_DAMPING: f64 = 0.5;
/// Logit scale applied to the score for positive/negative
const SCORE_SCALE: f64 = 4.0;
/// Fixed logit for neutral
const NEUTRAL_LOGIT: f64 = 0.5;

static BUILTIN: OnceLock<Result<Arc<PolarityClassifier>>> = OnceLock::new();

/// TOML schema for polarity tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolarityTable {
    /// Table code and name
    pub metadata: Metadata,
    /// Positive words and weights
    #[serde(default)]
    pub positive: BTreeMap<String, f64>,
    /// Negative words and (unsigned) weights
    #[serde(default)]
    pub negative: BTreeMap<String, f64>,
    /// Negators and intensifiers
    #[serde(default)]
    pub modifiers: Modifiers,
}

/// Negators and intensifiers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Words that flip the next polarity word
    #[serde(default)]
    pub negators: Vec<String>,
    /// Multipliers for the next polarity word
    #[serde(default)]
    pub intensifiers: BTreeMap<String, f64>,
}

impl PolarityTable {
    /// Parse a table from TOML text
    pub fn from_toml_str(toml_str: &str, origin: &str) -> Result<Self> {
        let table: PolarityTable = toml::from_str(toml_str).map_err(|e| LexiconError::Parse {
            table: origin.to_string(),
            reason: e.to_string(),
        })?;
        table.validate()?;
        Ok(table)
    }

    /// Load a table from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| LexiconError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    fn validate(&self) -> Result<()> {
        let bad_weight = self
            .positive
            .iter()
            .chain(self.negative.iter())
            .find(|(_, w)| !(w.is_finite() && **w > 0.0 && **w <= 1.0));

        if let Some((word, weight)) = bad_weight {
            return Err(LexiconError::Invalid {
                table: self.metadata.code.clone(),
                reason: format!("weight {weight} for {word:?} is outside (0, 1]"),
            });
        }

        Ok(())
    }
}

/// Rule-based [`Classifier`]; deterministic and infallible
#[derive(Debug, Clone)]
pub struct PolarityClassifier {
    /// Signed weights; negative words carry a negative sign
    weights: BTreeMap<String, f64>,
    negators: HashSet<String>,
    intensifiers: BTreeMap<String, f64>,
}

impl PolarityClassifier {
    /// Build from a polarity table
    pub fn from_table(table: &PolarityTable) -> Self {
        let mut weights = BTreeMap::new();
        for (word, weight) in &table.positive {
            weights.insert(word.to_lowercase(), *weight);
        }
        for (word, weight) in &table.negative {
            weights.insert(word.to_lowercase(), -*weight);
        }

        Self {
            weights,
            negators: table
                .modifiers
                .negators
                .iter()
                .map(|n| n.to_lowercase())
                .collect(),
            intensifiers: table
                .modifiers
                .intensifiers
                .iter()
                .map(|(k, v)| (k.to_lowercase(), *v))
                .collect(),
        }
    }

    /// Shared classifier built from the embedded Taglish polarity table
    pub fn builtin() -> Result<Arc<Self>> {
        BUILTIN
            .get_or_init(|| {
                let table = PolarityTable::from_toml_str(BUILTIN_TABLE, "sentiment")?;
                Ok(Arc::new(Self::from_table(&table)))
            })
            .clone()
    }

    /// Polarity score in [-1, 1]; 0 when no polarity word is present
    pub fn score(&self, text: &str) -> f64 {
        let mut total = 0.0;
        let mut hits = 0usize;
        let mut negation = 0usize;
        let mut intensifier = 1.0;

        for token in tokenize(text) {
            if self.negators.contains(&token) {
                negation = NEGATION_WINDOW;
                continue;
            }

            if let Some(&factor) = self.intensifiers.get(&token) {
                intensifier = factor;
                continue;
            }

            match self.weights.get(&token) {
                Some(&weight) => {
                    let mut value = weight * intensifier;
                    if negation > 0 {
                        value = -value * NEGATION_DAMPING;
                    }
                    total += value;
                    hits += 1;
                    negation = 0;
                    intensifier = 1.0;
                }
                None => negation = negation.saturating_sub(1),
            }
        }

        if hits == 0 {
            return 0.0;
        }
        (total / hits as f64).clamp(-1.0, 1.0)
    }
}

impl Classifier for PolarityClassifier {
    fn classify(&self, text: &str) -> std::result::Result<Classification, ClassifierError> {
        Ok(Classification::from_distribution(distribution(
            self.score(text),
        )))
    }
}

/// Softmax over `(scale * s, neutral, -scale * s)`
fn distribution(score: f64) -> Distribution {
    let logits = [SCORE_SCALE * score, NEUTRAL_LOGIT, -SCORE_SCALE * score];
    let max = logits.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|l| (l - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    Distribution::new(exps[0] / sum, exps[1] / sum, exps[2] / sum)
}

/// Lowercase word tokens; apostrophes inside words are kept
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|ch: char| !(ch.is_alphanumeric() || ch == '\'' || ch == '’'))
        .map(|token| token.trim_matches(|ch| ch == '\'' || ch == '’'))
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
}
