//! TOML schema for marker tables

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{LexiconError, Result};

/// A language-tagged marker table
///
/// ```toml
/// [metadata]
/// code = "tl"
/// name = "Tagalog"
///
/// [markers]
/// coordinating = ["at", "o", "pero"]
/// causal = ["dahil sa", "dahil"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerTable {
    /// Language code and name
    pub metadata: Metadata,
    /// Markers grouped by category; categories carry no matching semantics
    #[serde(default)]
    pub markers: BTreeMap<String, Vec<String>>,
}

/// Table metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Short language code (`tl`, `en`)
    pub code: String,
    /// Display name
    pub name: String,
}

impl MarkerTable {
    /// Create a table with a single `default` category
    pub fn new<I, S>(code: impl Into<String>, name: impl Into<String>, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut categories = BTreeMap::new();
        categories.insert(
            "default".to_string(),
            markers.into_iter().map(Into::into).collect(),
        );
        Self {
            metadata: Metadata {
                code: code.into(),
                name: name.into(),
            },
            markers: categories,
        }
    }

    /// Parse a table from TOML text; `origin` names the table in errors
    pub fn from_toml_str(toml_str: &str, origin: &str) -> Result<Self> {
        let table: MarkerTable = toml::from_str(toml_str).map_err(|e| LexiconError::Parse {
            table: origin.to_string(),
            reason: e.to_string(),
        })?;
        table.validate()?;
        Ok(table)
    }

    /// Load and validate a table from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| LexiconError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Language code
    pub fn code(&self) -> &str {
        &self.metadata.code
    }

    /// Human-readable language name
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// All markers in category order
    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.markers.values().flatten().map(String::as_str)
    }

    /// Number of markers across all categories
    pub fn len(&self) -> usize {
        self.markers.values().map(Vec::len).sum()
    }

    /// Whether the table declares no markers
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validate table contents
    pub(crate) fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(LexiconError::Invalid {
                table: self.metadata.name.clone(),
                reason: "language code must not be empty".to_string(),
            });
        }

        if let Some(blank) = self.markers().position(|m| m.trim().is_empty()) {
            return Err(LexiconError::Invalid {
                table: self.metadata.code.clone(),
                reason: format!("marker #{blank} is blank"),
            });
        }

        if let Some(padded) = self.markers().find(|m| m.trim() != *m) {
            return Err(LexiconError::Invalid {
                table: self.metadata.code.clone(),
                reason: format!("marker {padded:?} has surrounding whitespace"),
            });
        }

        Ok(())
    }
}
