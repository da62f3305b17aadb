//! Plain text output formatter

use super::{votes_summary, OutputFormatter};
use anyhow::Result;
use diskurso_api::Report;
use std::io::Write;

/// Plain text formatter - one block per sentence with its clauses indented
pub struct TextFormatter<W: Write> {
    writer: W,
    include_metadata: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, include_metadata: bool) -> Self {
        Self {
            writer,
            include_metadata,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, source: Option<&str>, report: &Report) -> Result<()> {
        if let Some(source) = source {
            writeln!(self.writer, "== {source} ==")?;
        }

        for (i, sentence) in report.sentences.iter().enumerate() {
            writeln!(self.writer, "Sentence {}: {}", i + 1, sentence.text)?;
            writeln!(self.writer, "  Sentiment: {}", sentence.sentiment.label)?;

            let markers: Vec<&str> = sentence.markers.iter().map(|m| m.text.as_str()).collect();
            if markers.is_empty() {
                writeln!(self.writer, "  Markers: (none)")?;
            } else {
                writeln!(self.writer, "  Markers: {}", markers.join(", "))?;
            }

            writeln!(self.writer, "  Clauses:")?;
            for clause in &sentence.clauses {
                writeln!(self.writer, "    [{}] {}", clause.sentiment.label, clause.text)?;
            }
        }

        writeln!(
            self.writer,
            "Overall: {} ({})",
            report.overall.as_deref().unwrap_or("none"),
            votes_summary(report)
        )?;

        if self.include_metadata {
            let meta = &report.metadata;
            writeln!(
                self.writer,
                "Processed {} bytes: {} sentences, {} clauses, {} markers in {} ms",
                meta.total_bytes,
                meta.sentence_count,
                meta.clause_count,
                meta.marker_count,
                meta.processing_time_ms
            )?;
        }

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{report, SharedBuffer};

    #[test]
    fn test_text_layout() {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(buffer.clone(), false);
        formatter
            .format_report(None, &report("Masaya ako, pero pagod na ako."))
            .unwrap();
        formatter.finish().unwrap();

        let out = buffer.contents();
        assert!(out.contains("Sentence 1: Masaya ako, pero pagod na ako\n"));
        assert!(out.contains("  Markers: pero\n"));
        assert!(out.contains("    [positive] Masaya ako\n"));
        assert!(out.contains("    [negative] pero pagod na ako\n"));
        assert!(out.contains("Overall: positive (positive 1, neutral 0, negative 1)\n"));
        assert!(!out.contains("Processed"));
    }

    #[test]
    fn test_text_source_and_metadata() {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(buffer.clone(), true);
        formatter
            .format_report(Some("tala.txt"), &report("."))
            .unwrap();

        let out = buffer.contents();
        assert!(out.starts_with("== tala.txt ==\n"));
        assert!(out.contains("Overall: none"));
        assert!(out.contains("Processed 1 bytes: 0 sentences"));
    }
}
