//! Output formatting module

use anyhow::Result;
use diskurso_api::Report;
use std::io::Write;
use std::str::FromStr;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format one analyzed input; `source` names the file, if any
    fn format_report(&mut self, source: Option<&str>, report: &Report) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Sentences, markers and clause labels as indented text
    Text,
    /// JSON array with one report per input
    Json,
    /// Markdown formatted output
    Markdown,
}

impl OutputFormat {
    /// All formats with a short description
    pub const ALL: [(OutputFormat, &'static str); 3] = [
        (OutputFormat::Text, "Indented plain text (default)"),
        (OutputFormat::Json, "JSON array of reports"),
        (OutputFormat::Markdown, "Markdown sections per sentence"),
    ];

    /// Lowercase name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    include_metadata: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, include_metadata)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, include_metadata)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, include_metadata)),
    }
}

/// `positive 1, neutral 0, negative 1`
pub(crate) fn votes_summary(report: &Report) -> String {
    format!(
        "positive {}, neutral {}, negative {}",
        report.votes.positive, report.votes.neutral, report.votes.negative
    )
}

#[cfg(test)]
pub(crate) mod test_support {
    use diskurso_api::Report;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    /// Writer whose contents stay readable after the formatter takes it
    #[derive(Clone, Default)]
    pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    pub fn report(text: &str) -> Report {
        diskurso_api::analyze_text(text).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(" MD ".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_names_round_trip() {
        for (format, _) in OutputFormat::ALL {
            assert_eq!(format.as_str().parse::<OutputFormat>().unwrap(), format);
        }
    }
}
