use log::{debug, info};

/// Receives coarse progress of a long-running computation.
///
/// Every method defaults to doing nothing, so an implementation only overrides
/// what it cares about. Progress is reporting only; there is no way to cancel.
pub trait ProgressSink {
    /// Announces the total number of major steps, once, before any work.
    fn major_steps(&mut self, _steps: usize) {}

    /// A major step is about to start (`started == true`) or has finished.
    fn major(&mut self, _started: bool) {}

    /// Announces the number of minor steps within the current major step.
    fn minor_steps(&mut self, _steps: usize) {}

    fn minor(&mut self) {}
}

/// Discards all progress.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {}

/// Counts major steps down and logs each one.
#[derive(Clone, Debug, Default)]
pub struct LogProgress {
    remaining: usize,
    minor_total: usize,
    minor_done: usize,
}

impl LogProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl ProgressSink for LogProgress {
    fn major_steps(&mut self, steps: usize) {
        self.remaining = steps;
        info!("{} major steps", steps);
    }

    fn major(&mut self, started: bool) {
        if started {
            info!("step {}", self.remaining);
            self.remaining = self.remaining.saturating_sub(1);
        }
        self.minor_total = 0;
        self.minor_done = 0;
    }

    fn minor_steps(&mut self, steps: usize) {
        self.minor_total = steps;
        self.minor_done = 0;
    }

    fn minor(&mut self) {
        self.minor_done += 1;
        debug!("  {}/{}", self.minor_done, self.minor_total);
    }
}
