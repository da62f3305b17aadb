//! Marker extraction for display and diagnostics

use std::sync::Arc;

use crate::lexicon::MarkerLexicon;
use crate::types::MarkerOccurrence;

/// Reports every marker occurrence in a sentence
///
/// Independent of [`ClauseSplitter`](crate::splitter::ClauseSplitter): nothing
/// extracted here feeds classification.
#[derive(Debug, Clone)]
pub struct MarkerExtractor {
    lexicon: Arc<MarkerLexicon>,
}

impl MarkerExtractor {
    /// Create an extractor
    pub fn new(lexicon: Arc<MarkerLexicon>) -> Self {
        Self { lexicon }
    }

    /// Occurrences in order of appearance, case preserved, duplicates kept
    pub fn extract(&self, sentence: &str) -> Vec<MarkerOccurrence> {
        self.lexicon.find_all(sentence)
    }

    /// Like [`extract`](Self::extract), but for raw bytes; invalid UTF-8 yields nothing
    pub fn extract_bytes(&self, bytes: &[u8]) -> Vec<MarkerOccurrence> {
        std::str::from_utf8(bytes)
            .map(|text| self.extract(text))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon;

    fn extractor() -> MarkerExtractor {
        MarkerExtractor::new(lexicon::builtin().unwrap())
    }

    fn texts(sentence: &str) -> Vec<String> {
        extractor()
            .extract(sentence)
            .into_iter()
            .map(|m| m.text)
            .collect()
    }

    #[test]
    fn test_single_marker() {
        assert_eq!(texts("I am happy but tired"), vec!["but"]);
        assert_eq!(texts("Masaya ako, pero pagod na ako"), vec!["pero"]);
    }

    #[test]
    fn test_order_case_and_duplicates() {
        assert_eq!(
            texts("Pero masaya, AND pagod, pero okay and fine"),
            vec!["Pero", "AND", "pero", "and"]
        );
    }

    #[test]
    fn test_offsets_point_into_sentence() {
        let sentence = "Kumain ako at uminom";
        let found = extractor().extract(sentence);
        assert_eq!(found.len(), 1);
        assert_eq!(&sentence[found[0].start..found[0].end], "at");
        assert_eq!(found[0].language, "tl");
    }

    #[test]
    fn test_no_markers() {
        assert!(texts("Ang ganda ng araw").is_empty());
    }

    #[test]
    fn test_extract_bytes() {
        assert_eq!(extractor().extract_bytes(b"tired but happy").len(), 1);
        assert!(extractor().extract_bytes(&[0xc3, 0x28]).is_empty());
    }
}
