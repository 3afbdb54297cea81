//! Local autocorrelation over one chunk.
//!
//! For every lag `s` in `0..max_shift`:
//!
//! ```text
//! sum[s] = Σ_{i=0}^{chunk_size-1} chunk[i] * chunk[i + s]
//! ```
//!
//! Accumulation is plain `f32` in ascending `i`, so a chunk always produces the
//! same bits. Cost is O(chunk_size × max_shift), which is why the signal is
//! split across workers in the first place.

use crate::{Chunk, Signal};

/// Per-lag sums produced by one worker.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialSums {
    worker: usize,
    sums: Vec<f32>,
}

impl PartialSums {
    pub fn new(worker: usize, sums: Vec<f32>) -> Self {
        Self { worker, sums }
    }

    /// Index of the worker that produced these sums.
    pub fn worker(&self) -> usize {
        self.worker
    }

    pub fn sums(&self) -> &[f32] {
        &self.sums
    }

    pub fn len(&self) -> usize {
        self.sums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }
}

/// Compute `out[s]` for every lag `s < out.len()`.
///
/// `samples` holds `chunk_size` exclusive values followed by at least
/// `out.len()` lookahead values.
///
/// # Panics
/// If `samples` is shorter than `chunk_size + out.len()`.
pub fn local_autocorrelation(samples: &[f32], chunk_size: usize, out: &mut [f32]) {
    let max_shift = out.len();
    assert!(
        samples.len() >= chunk_size + max_shift,
        "chunk of {} samples can not cover {} + {} lags",
        samples.len(),
        chunk_size,
        max_shift
    );

    let head = &samples[..chunk_size];
    for (s, slot) in out.iter_mut().enumerate() {
        let lagged = &samples[s..s + chunk_size];
        *slot = head
            .iter()
            .zip(lagged)
            .fold(0.0f32, |sum, (&a, &b)| sum + a * b);
    }
}

/// Correlate a worker's chunk over its full lag range.
pub fn correlate_chunk(chunk: &Chunk) -> PartialSums {
    let mut sums = vec![0.0f32; chunk.max_shift()];
    local_autocorrelation(chunk.samples(), chunk.chunk_size(), &mut sums);
    PartialSums::new(chunk.worker(), sums)
}

/// Single-threaded reference over the first `span` samples of `signal`,
/// accumulated in `f64`. Lag windows read through the wrap-around tail.
pub fn reference_autocorrelation(signal: &Signal, span: usize, max_shift: usize) -> Vec<f64> {
    let extended = signal.extended();
    let span = span.min(signal.len());
    let max_shift = max_shift.min(signal.max_shift());

    (0..max_shift)
        .map(|s| {
            extended[..span]
                .iter()
                .zip(&extended[s..s + span])
                .map(|(&a, &b)| a as f64 * b as f64)
                .sum::<f64>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Partition;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_lag_is_energy() {
        let samples = [1.0f32, 2.0, 3.0, 0.0, 0.0];
        let mut out = [0.0f32; 2];
        local_autocorrelation(&samples, 3, &mut out);
        assert_eq!(out[0], 14.0);
        // 1*2 + 2*3 + 3*0
        assert_eq!(out[1], 8.0);
    }

    #[test]
    fn test_lags_read_lookahead() {
        let samples = [1.0f32, 1.0, 5.0, 7.0, 0.0];
        let mut out = [0.0f32; 3];
        local_autocorrelation(&samples, 2, &mut out);
        assert_eq!(out, [2.0, 6.0, 12.0]);
    }

    #[test]
    #[should_panic]
    fn test_short_chunk_panics() {
        let mut out = [0.0f32; 4];
        local_autocorrelation(&[1.0, 2.0, 3.0], 2, &mut out);
    }

    #[test]
    fn test_correlate_chunk_boundary_scenario() {
        let signal = Signal::from_samples((0..16).map(|i| i as f32).collect(), 4).unwrap();
        let partition = Partition::for_signal(&signal, 2).unwrap();
        let chunks = partition.split(&signal);

        let p0 = correlate_chunk(&chunks[0]);
        let p1 = correlate_chunk(&chunks[1]);
        assert_eq!(p0.worker(), 0);
        assert_eq!(p1.worker(), 1);
        assert_eq!(p0.len(), 4);

        // Σ_{i<8} i² = 140, Σ_{8<=i<16} i² = 1100
        assert_eq!(p0.sums()[0], 140.0);
        assert_eq!(p1.sums()[0], 1100.0);
        assert_eq!(p0.sums()[0] + p1.sums()[0], 1240.0);
    }

    #[test]
    fn test_deterministic() {
        let samples: Vec<f32> = (0..1000).map(|i| ((i * 37) % 101) as f32 * 0.013 - 0.6).collect();
        let mut a = vec![0.0f32; 50];
        let mut b = vec![0.0f32; 50];
        local_autocorrelation(&samples, 950, &mut a);
        local_autocorrelation(&samples, 950, &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_reference_matches_chunks() {
        let samples: Vec<f32> = (0..64).map(|i| (i as f32 * 0.3).sin()).collect();
        let signal = Signal::from_samples(samples, 8).unwrap();
        let partition = Partition::for_signal(&signal, 4).unwrap();
        let reference = reference_autocorrelation(&signal, partition.covered(), 8);

        let mut total = [0.0f64; 8];
        for chunk in partition.split(&signal) {
            for (t, &v) in total.iter_mut().zip(correlate_chunk(&chunk).sums()) {
                *t += v as f64;
            }
        }

        for (&t, &r) in total.iter().zip(&reference) {
            assert_relative_eq!(t, r, epsilon = 1e-4, max_relative = 1e-4);
        }
    }
}
