//! Discourse marker lexicon
//!
//! Marker tables are plain TOML documents tagged with a language code. The
//! built-in Tagalog and English tables are embedded at compile time and
//! compiled into a single case-insensitive matcher on first use.

pub mod config;
pub mod loader;
pub mod matcher;

pub use config::MarkerTable;
pub use loader::{builtin, builtin_tables};
pub use matcher::{MarkerLexicon, MarkerLexiconBuilder};
