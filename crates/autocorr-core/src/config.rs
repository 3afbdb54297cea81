//! Correlation run configuration.

use crate::{Error, Result};

/// Default signal length (8M samples).
pub const DEFAULT_NUM_ELEMENTS: usize = 8 * 1024 * 1024;

/// Default number of lags. Enough to uncover a hidden sine with a period
/// of a few hundred samples.
pub const DEFAULT_MAX_SHIFT: usize = 1024;

/// How per-worker partial sums are merged into the global sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReduceStrategy {
    /// Collect every worker's sums, then fold them in ascending worker order.
    /// Bit-identical output for a fixed worker count.
    #[default]
    Ordered,
    /// Each worker adds into a mutex-guarded total as soon as it finishes.
    /// Complete, but the floating-point order follows completion order.
    Locked,
}

/// Configuration for a correlation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrelationConfig {
    /// Signal length N (default: 8 * 1024 * 1024)
    pub num_elements: usize,
    /// Number of lags L computed, `0..L` (default: 1024)
    pub max_shift: usize,
    /// Worker count override. `None` uses the available parallelism.
    pub workers: Option<usize>,
    /// Reduction discipline (default: ordered)
    pub reduce: ReduceStrategy,
    /// Emit a debug line per worker as it starts correlating.
    pub trace_workers: bool,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            num_elements: DEFAULT_NUM_ELEMENTS,
            max_shift: DEFAULT_MAX_SHIFT,
            workers: None,
            reduce: ReduceStrategy::Ordered,
            trace_workers: false,
        }
    }
}

impl CorrelationConfig {
    /// Config with custom sizes and defaults for everything else.
    pub fn with_sizes(num_elements: usize, max_shift: usize) -> Self {
        Self {
            num_elements,
            max_shift,
            ..Default::default()
        }
    }

    /// Check the sizes. The lag window wraps around using the first `max_shift`
    /// samples, so `max_shift` can not exceed the signal length.
    pub fn validate(&self) -> Result<()> {
        if self.num_elements == 0 {
            return Err(Error::Config("signal length must be non-zero".into()));
        }
        if self.max_shift == 0 {
            return Err(Error::Config("max shift must be non-zero".into()));
        }
        if self.max_shift > self.num_elements {
            return Err(Error::Config(format!(
                "max shift {} exceeds signal length {}",
                self.max_shift, self.num_elements
            )));
        }
        Ok(())
    }

    /// Worker count: the override if set, otherwise one per execution unit.
    ///
    /// Returns a configuration error when the count is zero or larger than
    /// the signal (every worker needs at least one exclusive sample).
    pub fn resolve_workers(&self) -> Result<usize> {
        let workers = match self.workers {
            Some(n) => n,
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        };

        if workers == 0 {
            return Err(Error::Config("worker count must be at least 1".into()));
        }
        if workers > self.num_elements {
            return Err(Error::Config(format!(
                "{} workers for {} samples leaves empty chunks",
                workers, self.num_elements
            )));
        }
        Ok(workers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CorrelationConfig::default();
        assert_eq!(config.num_elements, 8 * 1024 * 1024);
        assert_eq!(config.max_shift, 1024);
        assert_eq!(config.workers, None);
        assert_eq!(config.reduce, ReduceStrategy::Ordered);
        assert!(!config.trace_workers);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_sizes() {
        assert!(matches!(
            CorrelationConfig::with_sizes(0, 4).validate(),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            CorrelationConfig::with_sizes(16, 0).validate(),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            CorrelationConfig::with_sizes(16, 17).validate(),
            Err(Error::Config(_))
        ));
        assert!(CorrelationConfig::with_sizes(16, 16).validate().is_ok());
    }

    #[test]
    fn test_worker_override() {
        let mut config = CorrelationConfig::with_sizes(16, 4);
        config.workers = Some(2);
        assert_eq!(config.resolve_workers().unwrap(), 2);

        config.workers = Some(16);
        assert_eq!(config.resolve_workers().unwrap(), 16);
    }

    #[test]
    fn test_degenerate_worker_count() {
        let mut config = CorrelationConfig::with_sizes(16, 4);
        config.workers = Some(0);
        assert!(matches!(config.resolve_workers(), Err(Error::Config(_))));

        config.workers = Some(17);
        assert!(matches!(config.resolve_workers(), Err(Error::Config(_))));
    }

    #[test]
    fn test_auto_workers() {
        let config = CorrelationConfig::with_sizes(1 << 20, 4);
        assert!(config.resolve_workers().unwrap() >= 1);
    }
}
