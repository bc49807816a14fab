//! Progress bar utilities for batch simulation
//!
//! Visual feedback while grinding through many unattended runs, using the
//! indicatif crate.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress bar for batch simulation runs
pub struct BatchProgress {
    pub progress: ProgressBar,
}

impl BatchProgress {
    /// Create a new batch progress bar
    pub fn new(total_runs: usize) -> Self {
        let progress = ProgressBar::new(total_runs as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})\n{msg}")
                .unwrap()
                .progress_chars("#>-"),
        );

        Self { progress }
    }

    /// Update with the latest finished run
    pub fn update(&self, run: usize, final_balance: f64, xp: u32) {
        self.progress.set_position(run as u64);
        self.progress.set_message(format!(
            "🎯 Last run: ${:.2} DAI, {} XP",
            final_balance, xp
        ));
    }

    /// Mark the batch as complete
    pub fn finish(&self, win_rate_pct: f64) {
        self.progress.finish_with_message(format!(
            "✅ Batch complete! Win rate: {:.1}%",
            win_rate_pct
        ));
    }
}

/// Spinner for quick operations
pub struct Spinner {
    pub spinner: ProgressBar,
}

impl Spinner {
    /// Create a new spinner
    pub fn new(message: &str) -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message(message.to_string());

        Self { spinner }
    }

    /// Update spinner message
    pub fn update(&self, message: &str) {
        self.spinner.set_message(message.to_string());
    }

    /// Finish spinner with success
    pub fn finish(&self, message: &str) {
        self.spinner.finish_with_message(format!("✅ {}", message));
    }

    /// Finish spinner with error
    pub fn finish_with_error(&self, message: &str) {
        self.spinner.finish_with_message(format!("❌ {}", message));
    }
}
