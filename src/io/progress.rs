//! Progress display for batch maze verification

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static CHECK_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over a fixed number of generated mazes
///
/// Hidden when constructed with `visible = false`, so callers need no
/// separate quiet-mode branches.
pub struct CheckProgress {
    bar: ProgressBar,
}

impl CheckProgress {
    /// Create a progress display for `rounds` mazes of the given size
    pub fn new(rounds: usize, width: usize, height: usize, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(rounds as u64)
        } else {
            ProgressBar::hidden()
        };
        bar.set_style(CHECK_STYLE.clone());
        bar.set_message(format!("{width}x{height}"));
        Self { bar }
    }

    /// Record one verified maze
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Number of mazes recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
