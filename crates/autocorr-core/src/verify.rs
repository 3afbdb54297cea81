//! Cross-check parallel totals against the single-threaded reference.

use crate::{reference_autocorrelation, Correlation, Signal};

/// Largest tolerated deviation, relative to the zero-lag energy.
pub const DEFAULT_TOLERANCE: f64 = 1e-3;

/// Outcome of comparing a run with the `f64` reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verification {
    /// `max_s |global[s] - reference[s]| / |reference[0]|`
    pub max_relative_error: f64,
    /// Lag where the largest deviation occurred.
    pub worst_lag: usize,
    pub tolerance: f64,
}

impl Verification {
    pub fn passed(&self) -> bool {
        self.max_relative_error < self.tolerance
    }
}

/// Compare `result` with a reference over the samples the run actually covered.
pub fn verify(signal: &Signal, result: &Correlation, tolerance: f64) -> Verification {
    let sums = result.sums().as_slice();
    let reference = reference_autocorrelation(signal, result.partition().covered(), sums.len());

    let energy = reference.first().map_or(0.0, |r| r.abs());
    let scale = if energy > 0.0 { energy } else { 1.0 };

    let (worst_lag, max_abs) = sums
        .iter()
        .zip(&reference)
        .map(|(&g, &r)| (g as f64 - r).abs())
        .enumerate()
        .fold((0, 0.0f64), |best, (lag, err)| {
            if err > best.1 {
                (lag, err)
            } else {
                best
            }
        });

    Verification {
        max_relative_error: max_abs / scale,
        worst_lag,
        tolerance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CorrelationConfig, CorrelationEngine};

    #[test]
    fn test_ramp_is_exact() {
        let signal = Signal::from_samples((0..16).map(|i| i as f32).collect(), 4).unwrap();
        let config = CorrelationConfig {
            workers: Some(2),
            ..CorrelationConfig::with_sizes(16, 4)
        };
        let result = CorrelationEngine::new(config).unwrap().run(&signal).unwrap();

        let check = verify(&signal, &result, DEFAULT_TOLERANCE);
        assert_eq!(check.max_relative_error, 0.0);
        assert!(check.passed());
    }

    #[test]
    fn test_threshold() {
        let check = Verification {
            max_relative_error: 2e-3,
            worst_lag: 5,
            tolerance: DEFAULT_TOLERANCE,
        };
        assert!(!check.passed());
    }
}
