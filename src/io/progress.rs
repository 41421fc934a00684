//! Phase progress bars for image loading and cell extraction

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PHASE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg:>12}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} [{{elapsed_precise}}]"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Hands out one progress bar per pipeline phase
///
/// A disabled manager hands out hidden bars, so callers never branch on it.
#[derive(Debug, Clone, Copy)]
pub struct ProgressManager {
    enabled: bool,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager that draws to stderr
    pub const fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a manager whose bars never draw
    pub const fn hidden() -> Self {
        Self { enabled: false }
    }

    /// Whether bars from this manager are drawn
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Start a bar for a phase with `len` steps
    pub fn start_phase(&self, label: &'static str, len: usize) -> PhaseProgress {
        let bar = if self.enabled {
            let bar = ProgressBar::new(len as u64);
            bar.set_style(PHASE_STYLE.clone());
            bar
        } else {
            ProgressBar::hidden()
        };
        bar.set_message(label);
        PhaseProgress { bar }
    }
}

/// Progress of a single phase
pub struct PhaseProgress {
    bar: ProgressBar,
}

impl PhaseProgress {
    /// Record one finished step
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Steps recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Run `f` with the bar temporarily cleared so log lines are not torn
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
