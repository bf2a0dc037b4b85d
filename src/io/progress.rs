//! Batch progress display

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over the files of a batch
pub struct ProgressManager {
    bar: ProgressBar,
    rendered: usize,
    skipped: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a hidden progress manager; call [`Self::initialize`] to show it
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            rendered: 0,
            skipped: 0,
        }
    }

    /// Show a bar sized for `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = bar;
    }

    /// Name the file being rendered
    pub fn start_file(&self, path: &Path) {
        self.bar.set_message(display_name(path));
    }

    /// Count a rendered file
    pub fn complete_file(&mut self, path: &Path, elapsed: Duration) {
        self.rendered += 1;
        self.bar.set_message(format!(
            "✓ {} ({} ms)",
            display_name(path),
            elapsed.as_millis()
        ));
        self.bar.inc(1);
    }

    /// Count a file left untouched because its output exists
    pub fn skip_file(&mut self, path: &Path) {
        self.skipped += 1;
        let message = format!("skipped {}", display_name(path));
        self.bar.set_message(message);
        self.bar.inc(1);
    }

    /// Files rendered so far
    pub const fn rendered(&self) -> usize {
        self.rendered
    }

    /// Files skipped so far
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Replace the bar with a summary line
    pub fn finish(&self) {
        self.bar.finish_with_message(format!(
            "{} rendered, {} skipped",
            self.rendered, self.skipped
        ));
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
