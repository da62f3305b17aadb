//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use diskurso_api::Report;
use serde_json::Value;
use std::io::Write;

/// JSON formatter - outputs one report object per input as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    include_metadata: bool,
    documents: Vec<Value>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, include_metadata: bool) -> Self {
        Self {
            writer,
            include_metadata,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, source: Option<&str>, report: &Report) -> Result<()> {
        let mut document = serde_json::to_value(report)?;
        if let Value::Object(fields) = &mut document {
            if !self.include_metadata {
                fields.remove("metadata");
            }
            if let Some(source) = source {
                fields.insert("source".to_string(), Value::String(source.to_string()));
            }
        }
        self.documents.push(document);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
