//! Progress display for batch simulations and image scrambling

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] {{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Optional progress bar over a fixed number of work items
///
/// A hidden manager accepts the same calls and draws nothing, so callers do
/// not branch on quiet mode.
#[derive(Debug)]
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a visible progress bar for `total` items
    pub fn new(label: &str, total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_prefix(label.to_string());
        Self { bar }
    }

    /// Create a manager that draws nothing
    pub fn hidden(total: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total as u64);
        Self { bar }
    }

    /// Create a visible or hidden manager
    pub fn with_visibility(label: &str, total: usize, visible: bool) -> Self {
        if visible {
            Self::new(label, total)
        } else {
            Self::hidden(total)
        }
    }

    /// Record one finished item with a short status message
    pub fn advance(&self, message: &str) {
        self.bar.set_message(message.to_string());
        self.bar.inc(1);
    }

    /// Items finished so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total number of items
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Clear the bar once the batch is done
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
