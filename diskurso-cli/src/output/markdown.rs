//! Markdown output formatter

use super::{votes_summary, OutputFormatter};
use anyhow::Result;
use diskurso_api::Report;
use std::io::Write;

/// Markdown formatter - one section per sentence, clauses as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    include_metadata: bool,
    sentence_count: usize,
    clause_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, include_metadata: bool) -> Self {
        Self {
            writer,
            include_metadata,
            sentence_count: 0,
            clause_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, source: Option<&str>, report: &Report) -> Result<()> {
        if let Some(source) = source {
            writeln!(self.writer, "## {source}")?;
            writeln!(self.writer)?;
        }

        for sentence in &report.sentences {
            self.sentence_count += 1;
            writeln!(self.writer, "### Sentence {}", self.sentence_count)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "> {}", sentence.text)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "- Sentiment: **{}**", sentence.sentiment.label)?;

            let markers: Vec<String> = sentence
                .markers
                .iter()
                .map(|m| format!("`{}`", m.text))
                .collect();
            if markers.is_empty() {
                writeln!(self.writer, "- Markers: none")?;
            } else {
                writeln!(self.writer, "- Markers: {}", markers.join(", "))?;
            }

            writeln!(self.writer, "- Clauses:")?;
            for (i, clause) in sentence.clauses.iter().enumerate() {
                self.clause_count += 1;
                writeln!(
                    self.writer,
                    "  {}. {} *({})*",
                    i + 1,
                    clause.text,
                    clause.sentiment.label
                )?;
            }
            writeln!(self.writer)?;
        }

        writeln!(
            self.writer,
            "**Overall:** {} ({})",
            report.overall.as_deref().unwrap_or("none"),
            votes_summary(report)
        )?;
        if self.include_metadata {
            writeln!(
                self.writer,
                "*{} bytes in {} ms*",
                report.metadata.total_bytes, report.metadata.processing_time_ms
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total sentences: {}, total clauses: {}*",
            self.sentence_count, self.clause_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
