//! Progress reporting for large point files

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_THRESHOLD};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] {{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} points"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Displays a single progress bar while quantizing a point file
///
/// Small inputs finish faster than a bar can be drawn, so the bar is only
/// created once the point count exceeds [`PROGRESS_THRESHOLD`].
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a progress manager that draws nothing
    pub const fn hidden() -> Self {
        Self { bar: None }
    }

    /// Create a progress manager for `total` points read from `path`
    pub fn for_points(path: &Path, total: usize) -> Self {
        if total <= PROGRESS_THRESHOLD {
            return Self::hidden();
        }

        let bar = ProgressBar::new(total as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_prefix(
            path.file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
        );
        Self { bar: Some(bar) }
    }

    /// Whether a bar is being drawn
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Record one processed point
    pub fn advance(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Clear the bar once processing is complete
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
