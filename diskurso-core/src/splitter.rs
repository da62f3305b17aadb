//! Clause segmentation on discourse markers and secondary punctuation
//!
//! A sentence is cut at every marker and at every `,` `;` `:`. Punctuation is
//! dropped; a marker is kept and glued to the part that follows it, so
//! `"I am happy but tired"` becomes `["I am happy", "but tired"]`.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::lexicon::MarkerLexicon;

/// What to do with a marker that ends a sentence and has nothing to attach to
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingMarker {
    /// Discard it
    #[default]
    Drop,
    /// Emit it as a clause of its own
    Emit,
    /// Append it to the previous clause, or emit it alone if there is none
    AttachToPrevious,
}

/// Splitter configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitterConfig {
    /// Handling of a marker that ends a sentence
    #[serde(default)]
    pub trailing_marker: TrailingMarker,
}

/// Splits sentences into clauses
#[derive(Debug, Clone)]
pub struct ClauseSplitter {
    lexicon: Arc<MarkerLexicon>,
    config: SplitterConfig,
}

impl ClauseSplitter {
    /// Create a splitter with the default configuration
    pub fn new(lexicon: Arc<MarkerLexicon>) -> Self {
        Self::with_config(lexicon, SplitterConfig::default())
    }

    /// Create a splitter with an explicit configuration
    pub fn with_config(lexicon: Arc<MarkerLexicon>, config: SplitterConfig) -> Self {
        Self { lexicon, config }
    }

    /// Lexicon used for boundaries
    pub fn lexicon(&self) -> &Arc<MarkerLexicon> {
        &self.lexicon
    }

    /// Ordered, trimmed, non-empty clauses of `sentence`
    pub fn split(&self, sentence: &str) -> Vec<String> {
        let mut clauses: Vec<String> = Vec::new();
        let mut pending: Option<&str> = None;

        for part in self.parts(sentence) {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }

            if let Some(marker) = pending.take() {
                clauses.push(format!("{marker} {part}").trim().to_string());
            } else if self.lexicon.matches(part) {
                pending = Some(part);
            } else {
                clauses.push(part.to_string());
            }
        }

        if let Some(marker) = pending {
            self.flush_trailing(marker, &mut clauses);
        }

        clauses
    }

    /// Like [`split`](Self::split), but for raw bytes; invalid UTF-8 yields no clauses
    pub fn split_bytes(&self, bytes: &[u8]) -> Vec<String> {
        match std::str::from_utf8(bytes) {
            Ok(text) => self.split(text),
            Err(e) => {
                log::debug!("not splitting non-UTF-8 input: {e}");
                Vec::new()
            }
        }
    }

    /// Raw parts between separators, with each matched marker as its own part
    fn parts<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        let mut parts = Vec::new();
        let mut last = 0;

        for caps in self.lexicon.boundaries().captures_iter(sentence) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            parts.push(&sentence[last..whole.start()]);
            if let Some(marker) = caps.name("marker") {
                parts.push(marker.as_str());
            }
            last = whole.end();
        }
        parts.push(&sentence[last..]);

        parts
    }

    fn flush_trailing(&self, marker: &str, clauses: &mut Vec<String>) {
        match self.config.trailing_marker {
            TrailingMarker::Drop => {
                log::trace!("dropping trailing marker {marker:?}");
            }
            TrailingMarker::Emit => clauses.push(marker.to_string()),
            TrailingMarker::AttachToPrevious => match clauses.last_mut() {
                Some(previous) => {
                    previous.push(' ');
                    previous.push_str(marker);
                }
                None => clauses.push(marker.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon;

    fn splitter() -> ClauseSplitter {
        ClauseSplitter::new(lexicon::builtin().unwrap())
    }

    fn splitter_with(trailing_marker: TrailingMarker) -> ClauseSplitter {
        ClauseSplitter::with_config(
            lexicon::builtin().unwrap(),
            SplitterConfig { trailing_marker },
        )
    }

    #[test]
    fn test_marker_attaches_to_following_part() {
        assert_eq!(
            splitter().split("I am happy but tired"),
            vec!["I am happy", "but tired"]
        );
    }

    #[test]
    fn test_tagalog_with_comma() {
        assert_eq!(
            splitter().split("Masaya ako, pero pagod na ako"),
            vec!["Masaya ako", "pero pagod na ako"]
        );
    }

    #[test]
    fn test_plain_sentence_is_one_clause() {
        assert_eq!(
            splitter().split("  Ang ganda ng araw  "),
            vec!["Ang ganda ng araw"]
        );
    }

    #[test]
    fn test_secondary_punctuation() {
        assert_eq!(
            splitter().split("Una; pangalawa: pangatlo, pang-apat"),
            vec!["Una", "pangalawa", "pangatlo", "pang-apat"]
        );
    }

    #[test]
    fn test_leading_marker() {
        assert_eq!(
            splitter().split("However the food was cold"),
            vec!["However the food was cold"]
        );
    }

    #[test]
    fn test_consecutive_markers_merge_pairwise() {
        // "but" is pending when "so" arrives, so they join; "tired" stands alone
        assert_eq!(
            splitter().split("happy but so tired"),
            vec!["happy", "but so", "tired"]
        );
    }

    #[test]
    fn test_multi_word_marker_kept_whole() {
        assert_eq!(
            splitter().split("I studied because of this I passed"),
            vec!["I studied", "because of this I passed"]
        );
        assert_eq!(
            splitter().split("Umuwi siya dahil sa ulan"),
            vec!["Umuwi siya", "dahil sa ulan"]
        );
    }

    #[test]
    fn test_marker_case_preserved_in_clause() {
        assert_eq!(
            splitter().split("Gusto ko PERO mahal"),
            vec!["Gusto ko", "PERO mahal"]
        );
    }

    #[test]
    fn test_marker_before_punctuation_crosses_it() {
        // The comma is consumed, the pending marker still attaches
        assert_eq!(
            splitter().split("Pagod ako pero, masaya"),
            vec!["Pagod ako", "pero masaya"]
        );
    }

    #[test]
    fn test_rejoined_clauses_split_the_same() {
        let splitter = splitter();
        let clauses = splitter.split("Masaya ako, pero pagod na ako; kumain kami dahil sa gutom");
        assert_eq!(
            clauses,
            vec!["Masaya ako", "pero pagod na ako", "kumain kami", "dahil sa gutom"]
        );
        assert_eq!(splitter.split(&clauses.join("; ")), clauses);

        // A marker-free clause next to a marker clause stays whole
        assert_eq!(splitter.split("a; pero b"), vec!["a", "pero b"]);
        assert_eq!(splitter.split("Ang ganda ng araw; but tired"), vec!["Ang ganda ng araw", "but tired"]);
    }

    #[test]
    fn test_trailing_marker_policies() {
        assert_eq!(
            splitter_with(TrailingMarker::Drop).split("I am tired but"),
            vec!["I am tired"]
        );
        assert_eq!(
            splitter_with(TrailingMarker::Emit).split("I am tired but"),
            vec!["I am tired", "but"]
        );
        assert_eq!(
            splitter_with(TrailingMarker::AttachToPrevious).split("I am tired but"),
            vec!["I am tired but"]
        );
        assert_eq!(
            splitter_with(TrailingMarker::AttachToPrevious).split("but"),
            vec!["but"]
        );
    }

    #[test]
    fn test_only_marker_yields_nothing_by_default() {
        assert!(splitter().split("pero").is_empty());
        assert!(splitter().split(" , ; : ").is_empty());
        assert!(splitter().split("").is_empty());
    }

    #[test]
    fn test_split_bytes() {
        assert_eq!(
            splitter().split_bytes("Ok lang, pero pagod".as_bytes()),
            vec!["Ok lang", "pero pagod"]
        );
        assert!(splitter().split_bytes(&[0xff, 0xfe, 0x20]).is_empty());
    }
}
