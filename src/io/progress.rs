//! Progress display for batch mosaic composition

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static JOB_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {msg:12} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display for a batch of composition jobs
///
/// One bar tracks the batch as a whole, with the running job named in the
/// bar message. Construction is cheap; nothing is drawn until
/// [`Self::initialize`] is called.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    job_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            job_bar: None,
        }
    }

    /// Initialize the batch bar for the given number of jobs
    pub fn initialize(&mut self, job_count: usize) {
        let bar = ProgressBar::new(job_count as u64);
        bar.set_style(JOB_STYLE.clone());
        self.job_bar = Some(self.multi_progress.add(bar));
    }

    /// Show the job that is about to run
    pub fn start_job(&self, name: &str) {
        if let Some(ref bar) = self.job_bar {
            bar.set_message(name.to_string());
        }
    }

    /// Mark the current job as finished and advance the batch
    pub fn complete_job(&self) {
        if let Some(ref bar) = self.job_bar {
            bar.inc(1);
        }
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.job_bar {
            bar.finish_with_message("All mosaics composed");
        }
        let _ = self.multi_progress.clear();
    }
}
