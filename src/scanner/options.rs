use std::time::Duration;

/// Upper bound on automatically sized worker pools.
///
/// Directories with thousands of siblings would otherwise open that many
/// walks at once and thrash the disk.
pub const MAX_WORKERS: usize = 8;

/// Default minimum spacing between progress updates.
pub const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_millis(100);

/// Configuration options for directory scanning operations.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Include hidden files/directories (starting with .)
    pub include_hidden: bool,

    /// Number of parallel workers (0 = auto)
    pub threads: usize,

    /// Minimum spacing between progress updates
    pub progress_interval: Duration,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            include_hidden: false,
            threads: 0,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl ScanOptions {
    /// Create a new ScanOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to include hidden files
    pub fn with_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Set number of parallel workers
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Set the minimum spacing between progress updates
    pub fn with_progress_interval(mut self, interval: Duration) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Number of workers the pool should run.
    ///
    /// An explicit thread count wins; otherwise the available parallelism
    /// capped at [`MAX_WORKERS`].
    pub fn worker_count(&self) -> usize {
        if self.threads > 0 {
            return self.threads;
        }
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
            .min(MAX_WORKERS)
    }

    /// Check whether a base name is hidden under these options.
    pub fn skips_name(&self, name: &str) -> bool {
        !self.include_hidden && is_hidden(name)
    }
}

/// A hidden entry is any name starting with a period.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = ScanOptions::default();
        assert!(!opts.include_hidden);
        assert_eq!(opts.threads, 0);
        assert_eq!(opts.progress_interval, Duration::from_millis(100));
    }

    #[test]
    fn test_scan_options_chaining() {
        let opts = ScanOptions::new()
            .with_hidden(true)
            .with_threads(3)
            .with_progress_interval(Duration::from_millis(250));

        assert!(opts.include_hidden);
        assert_eq!(opts.threads, 3);
        assert_eq!(opts.progress_interval, Duration::from_millis(250));
    }

    #[test]
    fn test_worker_count_auto_is_capped() {
        let count = ScanOptions::default().worker_count();
        assert!(count >= 1);
        assert!(count <= MAX_WORKERS);
    }

    #[test]
    fn test_worker_count_explicit() {
        assert_eq!(ScanOptions::new().with_threads(2).worker_count(), 2);
        assert_eq!(ScanOptions::new().with_threads(32).worker_count(), 32);
    }

    #[test]
    fn test_hidden_names() {
        assert!(is_hidden(".git"));
        assert!(is_hidden("."));
        assert!(!is_hidden("src"));
        assert!(!is_hidden("file.txt"));
        assert!(!is_hidden(""));

        assert!(ScanOptions::new().skips_name(".cache"));
        assert!(!ScanOptions::new().with_hidden(true).skips_name(".cache"));
    }
}
