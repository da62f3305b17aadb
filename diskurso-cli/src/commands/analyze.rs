//! Analyze command implementation

use anyhow::{Context, Result};
use clap::Args;
use diskurso_api::{Analyzer, ApiError, Config, TrailingMarker};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, Source};
use crate::output::{create_formatter, OutputFormat};
use crate::progress::ProgressReporter;

/// Arguments for the analyze command
#[derive(Debug, Default, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob); reads stdin when neither this nor --text is given
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Text to analyze
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Extra marker table file; may be repeated
    #[arg(long = "lexicon", value_name = "FILE")]
    pub lexicons: Vec<PathBuf>,

    /// Polarity table used instead of the builtin one
    #[arg(long, value_name = "FILE")]
    pub sentiment_table: Option<PathBuf>,

    /// Do not load the builtin Tagalog and English tables
    #[arg(long)]
    pub no_builtin: bool,

    /// Handling of a marker that ends a sentence [default: drop]
    #[arg(long, value_enum)]
    pub trailing_marker: Option<TrailingPolicy>,

    /// Sentence terminator characters, e.g. ".!?" [default: .]
    #[arg(long, value_name = "CHARS")]
    pub terminators: Option<String>,

    /// Include processing metadata in the output
    #[arg(long)]
    pub metadata: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Trailing marker policies as spelled on the command line
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TrailingPolicy {
    /// Discard the marker
    Drop,
    /// Keep the marker as a clause of its own
    Emit,
    /// Append the marker to the previous clause
    Attach,
}

impl From<TrailingPolicy> for TrailingMarker {
    fn from(policy: TrailingPolicy) -> Self {
        match policy {
            TrailingPolicy::Drop => TrailingMarker::Drop,
            TrailingPolicy::Emit => TrailingMarker::Emit,
            TrailingPolicy::Attach => TrailingMarker::AttachToPrevious,
        }
    }
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting analysis");
        log::debug!("Arguments: {:?}", self);

        let cli_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let analyzer = Analyzer::with_config(self.analyzer_config(&cli_config)?)
            .context("Failed to load marker or polarity tables")?;
        let format = match self.format {
            Some(format) => format,
            None => cli_config.output.format()?,
        };
        let include_metadata = self.metadata || cli_config.output.include_metadata;

        let sources = self.sources()?;
        let mut formatter = create_formatter(format, self.open_output()?, include_metadata);

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(sources.len() as u64);

        for source in sources {
            let name = source.name();
            let report = analyzer
                .analyze(source.into_input()?)
                .with_context(|| {
                    format!("Failed to analyze {}", name.as_deref().unwrap_or("input"))
                })?;

            log::info!(
                "{}: {} sentences, {} clauses, overall {}",
                name.as_deref().unwrap_or("input"),
                report.metadata.sentence_count,
                report.metadata.clause_count,
                report.overall.as_deref().unwrap_or("none")
            );

            formatter.format_report(name.as_deref(), &report)?;
            if let Some(name) = &name {
                progress.file_completed(name);
            }
        }

        progress.finish();
        formatter.finish()
    }

    /// Merge command-line flags over the config file
    fn analyzer_config(&self, cli_config: &CliConfig) -> Result<Config> {
        let analysis = &cli_config.analysis;

        let terminators: Vec<char> = match &self.terminators {
            Some(chars) => chars.chars().collect(),
            None => analysis.terminators.clone(),
        };
        let trailing_marker = self
            .trailing_marker
            .map(TrailingMarker::from)
            .unwrap_or(analysis.trailing_marker);

        let mut builder = Config::builder()
            .include_builtin(analysis.include_builtin && !self.no_builtin)
            .terminators(terminators)
            .trailing_marker(trailing_marker);
        for path in analysis.lexicons.iter().chain(&self.lexicons) {
            builder = builder.lexicon_file(path.clone());
        }
        let sentiment_table = self
            .sentiment_table
            .as_ref()
            .or(analysis.sentiment_table.as_ref());
        if let Some(path) = sentiment_table {
            builder = builder.sentiment_table(path.clone());
        }

        builder.build().map_err(|e| match e {
            ApiError::Config(msg) => CliError::ConfigError(msg).into(),
            other => anyhow::Error::new(other),
        })
    }

    fn sources(&self) -> Result<Vec<Source>> {
        if let Some(text) = &self.text {
            return Ok(vec![Source::Text(text.clone())]);
        }

        if !self.input.is_empty() {
            let files = resolve_patterns(&self.input)?;
            return Ok(files.into_iter().map(Source::File).collect());
        }

        log::debug!("no --input or --text given, reading stdin");
        Ok(vec![Source::Stdin])
    }

    fn open_output(&self) -> Result<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path).with_context(|| {
                    format!("Failed to create output file: {}", path.display())
                })?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when commands run in-process
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args_for(text: &str, output: PathBuf) -> AnalyzeArgs {
        AnalyzeArgs {
            text: Some(text.to_string()),
            output: Some(output),
            quiet: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_execute_text_to_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.txt");

        args_for("Masaya ako, pero pagod na ako.", output.clone())
            .execute()
            .unwrap();

        let content = std::fs::read_to_string(output).unwrap();
        assert!(content.contains("[positive] Masaya ako"));
        assert!(content.contains("[negative] pero pagod na ako"));
        assert!(content.contains("Overall: positive"));
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("diskurso.toml");
        std::fs::write(
            &config_path,
            "[analysis]\nterminators = [\".\", \"!\"]\ntrailing_marker = \"attach_to_previous\"\n",
        )
        .unwrap();
        let cli_config = CliConfig::from_file(&config_path).unwrap();

        let args = AnalyzeArgs {
            trailing_marker: Some(TrailingPolicy::Emit),
            ..Default::default()
        };
        let config = args.analyzer_config(&cli_config).unwrap();
        assert_eq!(config.trailing_marker(), TrailingMarker::Emit);
        assert_eq!(config.terminators(), &['.', '!']);

        let args = AnalyzeArgs {
            terminators: Some("?".to_string()),
            ..Default::default()
        };
        let config = args.analyzer_config(&cli_config).unwrap();
        assert_eq!(config.trailing_marker(), TrailingMarker::AttachToPrevious);
        assert_eq!(config.terminators(), &['?']);
        assert!(config.sentiment_table().is_none());

        let args = AnalyzeArgs {
            sentiment_table: Some(PathBuf::from("polarity.toml")),
            ..Default::default()
        };
        let config = args.analyzer_config(&cli_config).unwrap();
        assert_eq!(
            config.sentiment_table(),
            Some(std::path::Path::new("polarity.toml"))
        );
    }

    #[test]
    fn test_no_builtin_requires_lexicon() {
        let args = AnalyzeArgs {
            no_builtin: true,
            ..Default::default()
        };
        let err = args.analyzer_config(&CliConfig::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_sources() {
        let args = AnalyzeArgs::default();
        assert_eq!(args.sources().unwrap(), vec![Source::Stdin]);

        let args = AnalyzeArgs {
            text: Some("Okay.".to_string()),
            ..Default::default()
        };
        assert_eq!(
            args.sources().unwrap(),
            vec![Source::Text("Okay.".to_string())]
        );
    }
}
