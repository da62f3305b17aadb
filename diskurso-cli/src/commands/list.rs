//! List command implementations

use anyhow::Result;
use diskurso_core::lexicon;

use crate::output::OutputFormat;

/// Print the builtin marker tables, optionally only one language
pub fn markers(language: Option<&str>) -> Result<()> {
    let tables = lexicon::builtin_tables()?;

    let selected: Vec<_> = tables
        .iter()
        .filter(|t| language.map_or(true, |code| t.code().eq_ignore_ascii_case(code)))
        .collect();

    if selected.is_empty() {
        let available: Vec<&str> = tables.iter().map(|t| t.code()).collect();
        anyhow::bail!(
            "Unknown language code: {} (available: {})",
            language.unwrap_or_default(),
            available.join(", ")
        );
    }

    for table in selected {
        println!("{} ({}): {} markers", table.name(), table.code(), table.len());
        for (category, markers) in &table.markers {
            println!("  {category}: {}", markers.join(", "));
        }
    }

    Ok(())
}

/// Print the available output formats
pub fn formats() -> Result<()> {
    println!("Available output formats:");
    for (format, description) in OutputFormat::ALL {
        println!("  {:<10} {description}", format.as_str());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_known_and_unknown_language() {
        assert!(markers(None).is_ok());
        assert!(markers(Some("TL")).is_ok());

        let err = markers(Some("ja")).unwrap_err();
        assert!(err.to_string().contains("available: tl, en"));
    }
}
