use std::time::{Duration, Instant};

/// "N of M directories scanned" signal emitted while subdirectories are
/// being measured. Advisory only; totals never depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanProgress {
    pub scanned: usize,
    pub total: usize,
}

impl ScanProgress {
    pub fn is_complete(&self) -> bool {
        self.scanned >= self.total
    }
}

/// Rate limiter for progress updates, local to one scan.
#[derive(Debug)]
pub struct ProgressThrottle {
    interval: Duration,
    last_emit: Option<Instant>,
}

impl ProgressThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_emit: None,
        }
    }

    /// Decide whether an update observed at `now` should be emitted.
    ///
    /// The first update always passes. Completion always passes so the last
    /// signal a consumer sees is `total/total`.
    pub fn should_emit(&mut self, progress: ScanProgress, now: Instant) -> bool {
        let due = match self.last_emit {
            None => true,
            Some(last) => now.duration_since(last) >= self.interval,
        };

        if due || progress.is_complete() {
            self.last_emit = Some(now);
            true
        } else {
            false
        }
    }
}
