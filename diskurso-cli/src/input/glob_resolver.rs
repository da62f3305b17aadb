//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Resolve file patterns to actual file paths
///
/// A pattern naming an existing file is taken literally, so file names
/// containing glob metacharacters still work.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let literal = Path::new(pattern);
        if literal.is_file() {
            files.push(literal.to_path_buf());
            continue;
        }

        if !has_glob_meta(pattern) {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }

        let paths = glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;
        for path_result in paths {
            let path = path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    log::info!("resolved {} input files", files.len());
    Ok(files)
}

fn has_glob_meta(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}
