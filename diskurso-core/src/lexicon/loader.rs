//! Embedded marker tables
//!
//! The built-in lexicon is compiled once per process and shared afterwards.

use std::sync::{Arc, OnceLock};

use crate::error::Result;
use crate::lexicon::{config::MarkerTable, matcher::MarkerLexicon};

const TAGALOG: &str = include_str!("../../configs/markers/tagalog.toml");
const ENGLISH: &str = include_str!("../../configs/markers/english.toml");

/// Compiled built-in lexicon
static BUILTIN: OnceLock<Result<Arc<MarkerLexicon>>> = OnceLock::new();

/// The embedded Tagalog and English tables, in that order
pub fn builtin_tables() -> Result<Vec<MarkerTable>> {
    Ok(vec![
        MarkerTable::from_toml_str(TAGALOG, "tagalog")?,
        MarkerTable::from_toml_str(ENGLISH, "english")?,
    ])
}

/// Process-wide lexicon built from the embedded tables
pub fn builtin() -> Result<Arc<MarkerLexicon>> {
    BUILTIN
        .get_or_init(|| {
            let lexicon = MarkerLexicon::from_tables(builtin_tables()?)?;
            log::debug!(
                "compiled built-in marker lexicon ({} markers)",
                lexicon.len()
            );
            Ok(Arc::new(lexicon))
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_parse() {
        let tables = builtin_tables().unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].code(), "tl");
        assert_eq!(tables[1].code(), "en");
        assert!(tables[0].markers().any(|m| m == "pero"));
        assert!(tables[1].markers().any(|m| m == "because of this"));
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = builtin().unwrap();
        let b = builtin().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
