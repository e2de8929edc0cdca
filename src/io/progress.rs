//! Multi-run progress tracking with automatic batching for large seed ranges

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Display state of one run: label, occupied cells, total cells
#[derive(Debug, Clone, Default)]
struct RunState {
    label: String,
    occupied: usize,
    total: usize,
}

/// Coordinates progress display while sketches are generated
///
/// Shows one bar per run for small batches and adds an overall batch bar
/// once the number of runs exceeds the individual bar limit. Individual bars
/// always show the most recent runs.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    run_bars: Vec<ProgressBar>,
    runs: Vec<RunState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static CELL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Seeds: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            run_bars: Vec::new(),
            runs: Vec::new(),
        }
    }

    /// Create bars for `run_count` upcoming runs
    pub fn initialize(&mut self, run_count: usize) {
        if run_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(run_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..run_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(CELL_STYLE.clone());
            self.run_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Register a run about to fill `total` cells
    pub fn start_run(&mut self, index: usize, label: &str, total: usize) {
        if index >= self.runs.len() {
            self.runs.resize(index + 1, RunState::default());
        }
        if let Some(run) = self.runs.get_mut(index) {
            *run = RunState {
                label: label.to_string(),
                occupied: 0,
                total,
            };
        }
        self.update_bars();
    }

    /// Report the occupied cell count of a run
    pub fn update_run(&mut self, index: usize, occupied: usize) {
        if let Some(run) = self.runs.get_mut(index) {
            run.occupied = occupied;
        }
        self.update_bars();
    }

    /// Mark a run as finished
    pub fn complete_run(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(run) = self.runs.get_mut(index) {
            run.label = format!("✓ {}", run.label);
            run.occupied = run.total;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All seeds rendered");
        }
        let _ = self.multi_progress.clear();
    }

    fn update_bars(&self) {
        let active: Vec<&RunState> = self.runs.iter().filter(|run| !run.label.is_empty()).collect();
        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar_index, run) in visible.iter().enumerate() {
            if let Some(bar) = self.run_bars.get(bar_index) {
                bar.set_length(run.total as u64);
                bar.set_position(run.occupied as u64);
                let width = run.total.to_string().len();
                bar.set_message(format!("{:>width$}/{}", run.occupied, run.total));
                bar.set_prefix(run.label.clone());
            }
        }

        for bar in self.run_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }

    /// Number of per-run bars currently allocated
    pub fn bar_count(&self) -> usize {
        self.run_bars.len()
    }

    /// Whether an overall batch bar is shown
    pub const fn has_batch_bar(&self) -> bool {
        self.batch_bar.is_some()
    }
}
