//! Reduction of per-worker partial sums into global per-lag totals.
//!
//! Two disciplines, both complete:
//! - [`fold_ordered`] adds collected partials in ascending worker order, so a
//!   fixed worker count always yields the same bits.
//! - [`Reducer`] guards the totals with a mutex and lets each worker add its
//!   sums as soon as it finishes.

use crate::PartialSums;
use parking_lot::Mutex;

/// Share of the largest post-lobe total a local peak must reach to count as
/// the dominant period. Absorbs noise between repeated peaks of one period.
pub const PEAK_FRACTION: f32 = 0.9;

/// Per-lag autocorrelation totals across all workers.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalSums {
    sums: Vec<f32>,
}

impl GlobalSums {
    /// Totals for `max_shift` lags, all zero.
    pub fn zeroed(max_shift: usize) -> Self {
        Self {
            sums: vec![0.0; max_shift],
        }
    }

    /// Add one worker's contribution, lag by lag.
    ///
    /// # Panics
    /// If the lag counts differ.
    pub fn add(&mut self, partial: &PartialSums) {
        assert_eq!(
            self.sums.len(),
            partial.len(),
            "worker {} produced {} lags, expected {}",
            partial.worker(),
            partial.len(),
            self.sums.len()
        );
        for (total, &value) in self.sums.iter_mut().zip(partial.sums()) {
            *total += value;
        }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.sums
    }

    pub fn get(&self, lag: usize) -> Option<f32> {
        self.sums.get(lag).copied()
    }

    /// Number of lags.
    pub fn len(&self) -> usize {
        self.sums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.sums
    }

    /// Lag of the strongest periodic component.
    ///
    /// Walks down the zero-lag lobe to its first trough, then returns the
    /// first local peak past it reaching [`PEAK_FRACTION`] of the largest
    /// remaining total. A peak needs a lower total on both sides, so a curve
    /// still rising at the last computed lag yields `None`, as do totals that
    /// never rise again or never turn positive.
    pub fn dominant_lag(&self) -> Option<usize> {
        let sums = &self.sums;
        let trough = (0..sums.len().saturating_sub(1)).find(|&s| sums[s + 1] > sums[s])?;

        let peak = sums[trough..]
            .iter()
            .copied()
            .fold(f32::NEG_INFINITY, f32::max);
        if peak <= 0.0 {
            return None;
        }

        let threshold = peak * PEAK_FRACTION;
        (trough + 1..sums.len() - 1).find(|&s| {
            sums[s] >= threshold && sums[s] >= sums[s - 1] && sums[s] > sums[s + 1]
        })
    }
}

/// Fold collected partials in ascending worker order.
pub fn fold_ordered(mut partials: Vec<PartialSums>, max_shift: usize) -> GlobalSums {
    partials.sort_by_key(PartialSums::worker);

    let mut total = GlobalSums::zeroed(max_shift);
    for partial in &partials {
        total.add(partial);
    }
    total
}

/// Mutex-guarded accumulator for concurrent contributions.
pub struct Reducer {
    inner: Mutex<Accumulator>,
}

struct Accumulator {
    sums: GlobalSums,
    contributions: usize,
}

impl Reducer {
    pub fn new(max_shift: usize) -> Self {
        Self {
            inner: Mutex::new(Accumulator {
                sums: GlobalSums::zeroed(max_shift),
                contributions: 0,
            }),
        }
    }

    /// Add a worker's sums under the lock. Safe to call from any thread.
    pub fn contribute(&self, partial: &PartialSums) {
        let mut inner = self.inner.lock();
        inner.sums.add(partial);
        inner.contributions += 1;
    }

    /// Number of contributions folded in so far.
    pub fn contributions(&self) -> usize {
        self.inner.lock().contributions
    }

    /// Consume the reducer once every worker has joined.
    pub fn into_sums(self) -> GlobalSums {
        self.inner.into_inner().sums
    }
}
