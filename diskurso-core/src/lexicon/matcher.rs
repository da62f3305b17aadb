//! Compiled, case-insensitive marker matcher

use regex::{Captures, Regex};
use std::collections::HashSet;

use crate::error::{LexiconError, Result};
use crate::lexicon::config::MarkerTable;
use crate::types::MarkerOccurrence;

/// Immutable set of discourse markers compiled into regex matchers
///
/// Candidates are tried longest-first, so at any position a multi-word phrase
/// wins over a marker that is its prefix ("because of this" over "because",
/// "dahil sa" over "dahil").
///
/// Every marker is its own capture group in `finder` and `exact`; the language
/// of a match is read from the index of the group that matched.
#[derive(Debug, Clone)]
pub struct MarkerLexicon {
    /// Markers in precedence order
    ordered: Vec<String>,
    /// Language code per entry of `ordered`
    languages: Vec<String>,
    /// `\b(?:(m0)|(m1)|...)\b`
    finder: Regex,
    /// `\A(?:(m0)|(m1)|...)\z`
    exact: Regex,
    /// Marker (captured) or secondary punctuation
    boundaries: Regex,
}

impl MarkerLexicon {
    /// Start building a lexicon
    pub fn builder() -> MarkerLexiconBuilder {
        MarkerLexiconBuilder::default()
    }

    /// Compile a lexicon from tables; earlier tables own shared markers
    pub fn from_tables(tables: Vec<MarkerTable>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut entries: Vec<(String, String)> = Vec::new();

        for table in &tables {
            table.validate()?;
            for marker in table.markers() {
                if !seen.insert(marker.to_lowercase()) {
                    log::trace!("skipping duplicate marker {marker:?} in {}", table.code());
                    continue;
                }
                entries.push((marker.to_string(), table.code().to_string()));
            }
        }

        if entries.is_empty() {
            return Err(LexiconError::Empty);
        }

        // Stable: equal-length markers keep declaration order
        entries.sort_by_key(|(m, _)| std::cmp::Reverse(m.chars().count()));
        let (ordered, languages): (Vec<String>, Vec<String>) = entries.into_iter().unzip();

        let escaped: Vec<String> = ordered.iter().map(|m| regex::escape(m)).collect();
        let alternation = escaped.join("|");
        let grouped = escaped
            .iter()
            .map(|m| format!("({m})"))
            .collect::<Vec<_>>()
            .join("|");

        let finder = Regex::new(&format!(r"(?i)\b(?:{grouped})\b"))?;
        let exact = Regex::new(&format!(r"(?i)\A(?:{grouped})\z"))?;
        let boundaries = Regex::new(&format!(r"(?i)(?P<marker>\b(?:{alternation})\b)|[,;:]"))?;

        Ok(Self {
            ordered,
            languages,
            finder,
            exact,
            boundaries,
        })
    }

    /// Whether `candidate`, ignoring surrounding whitespace, is exactly one marker
    pub fn matches(&self, candidate: &str) -> bool {
        self.exact.is_match(candidate.trim())
    }

    /// All marker occurrences in `text`, left to right, non-overlapping
    pub fn find_all(&self, text: &str) -> Vec<MarkerOccurrence> {
        self.finder
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let language = self.language_at(&caps)?;
                Some(MarkerOccurrence {
                    text: whole.as_str().to_string(),
                    start: whole.start(),
                    end: whole.end(),
                    language: language.to_string(),
                })
            })
            .collect()
    }

    /// Language code of the table that declared `marker`
    pub fn language_of(&self, marker: &str) -> Option<&str> {
        let caps = self.exact.captures(marker.trim())?;
        self.language_at(&caps)
    }

    /// Language of the single marker group that participated in `caps`
    fn language_at(&self, caps: &Captures<'_>) -> Option<&str> {
        let index = caps.iter().skip(1).position(|group| group.is_some())?;
        self.languages.get(index).map(String::as_str)
    }

    /// Markers in matching precedence order
    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    /// Number of distinct markers
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Always false for a successfully built lexicon
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Splitting pattern: a marker in the `marker` group, or `,` `;` `:`
    pub(crate) fn boundaries(&self) -> &Regex {
        &self.boundaries
    }
}

/// Builder for [`MarkerLexicon`]
#[derive(Debug, Default)]
pub struct MarkerLexiconBuilder {
    tables: Vec<MarkerTable>,
}

impl MarkerLexiconBuilder {
    /// Add a table
    pub fn table(mut self, table: MarkerTable) -> Self {
        self.tables.push(table);
        self
    }

    /// Add the embedded Tagalog and English tables
    pub fn builtin_tables(mut self) -> Result<Self> {
        self.tables.extend(crate::lexicon::loader::builtin_tables()?);
        Ok(self)
    }

    /// Compile the lexicon
    pub fn build(self) -> Result<MarkerLexicon> {
        MarkerLexicon::from_tables(self.tables)
    }
}
