//! Progress reporting module

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}";

/// Progress reporter for multi-file analysis
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Show a bar when more than one file is analyzed
    pub fn init_files(&mut self, total_files: u64) {
        if self.quiet || total_files < 2 {
            return;
        }

        let pb = ProgressBar::with_draw_target(Some(total_files), ProgressDrawTarget::stderr());
        match ProgressStyle::with_template(TEMPLATE) {
            Ok(style) => pb.set_style(style.progress_chars("##-")),
            Err(e) => log::debug!("falling back to default progress style: {e}"),
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Whether a bar is being drawn
    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }

    /// Update progress for a completed file
    pub fn file_completed(&self, filename: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Analyzed: {filename}"));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_only_for_several_files() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_files(1);
        assert!(!reporter.is_active());

        reporter.init_files(3);
        assert!(reporter.is_active());
        reporter.file_completed("a.txt");
        reporter.finish();
    }

    #[test]
    fn test_quiet_never_draws() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_files(10);
        assert!(!reporter.is_active());
    }
}
