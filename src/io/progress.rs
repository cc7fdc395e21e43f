//! Tile progress reporting
//!
//! The renderer reports through [`ProgressSink`] rather than writing to the
//! terminal itself. Sinks are shared across rayon workers, so they must be
//! `Sync`; the renderer guarantees each `completed` value from 1 to `total`
//! is reported exactly once, though not necessarily in order when parallel.

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Receiver for per-tile progress updates
pub trait ProgressSink: Sync {
    /// Called once after each tile is rendered
    fn tile_completed(&self, completed: usize, total: usize);
}

/// Sink that discards all updates
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn tile_completed(&self, _completed: usize, _total: usize) {}
}

impl<F> ProgressSink for F
where
    F: Fn(usize, usize) + Sync,
{
    fn tile_completed(&self, completed: usize, total: usize) {
        self(completed, total);
    }
}

static TILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}}: {{pos}}/{{len}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}]"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█░")
});

/// Terminal progress bar counting rendered tiles
pub struct TileProgress {
    bar: ProgressBar,
}

impl TileProgress {
    /// Progress bar titled after the image being processed
    pub fn new(input: &Path) -> Self {
        Self::with_bar(ProgressBar::new(0), input)
    }

    /// Progress bar that tracks counts without drawing anything
    pub fn hidden(input: &Path) -> Self {
        Self::with_bar(ProgressBar::hidden(), input)
    }

    fn with_bar(bar: ProgressBar, input: &Path) -> Self {
        bar.set_style(TILE_STYLE.clone());
        bar.set_message(format!("Processing \"{}\"", input.display()));
        Self { bar }
    }

    /// Tiles reported so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total tiles, once the first tile has been reported
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressSink for TileProgress {
    fn tile_completed(&self, _completed: usize, total: usize) {
        let total = total as u64;
        if self.bar.length() != Some(total) {
            self.bar.set_length(total);
        }
        self.bar.inc(1);
    }
}
