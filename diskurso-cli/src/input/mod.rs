//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use diskurso_api::Input;
use std::path::PathBuf;

/// Where one analyzed text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Text given on the command line
    Text(String),
    /// A file resolved from `--input`
    File(PathBuf),
    /// Standard input
    Stdin,
}

impl Source {
    /// Display name for reports; only files are named
    pub fn name(&self) -> Option<String> {
        match self {
            Source::File(path) => Some(path.display().to_string()),
            Source::Text(_) | Source::Stdin => None,
        }
    }

    /// Turn the source into analyzer input, reading files eagerly
    pub fn into_input(self) -> Result<Input> {
        Ok(match self {
            Source::Text(text) => Input::from_text(text),
            Source::File(path) => Input::from_text(FileReader::read_text(&path)?),
            Source::Stdin => Input::from_reader(std::io::stdin()),
        })
    }
}
