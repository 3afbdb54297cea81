//! Signal store.
//!
//! Owns the full sample buffer plus a wrap-around tail: the first `max_shift`
//! samples are appended after the last one, so a lag window starting anywhere
//! in `0..len` can read `max_shift` samples ahead without bounds juggling.

use crate::{Error, Result};

/// An immutable signal of `len` samples with its circular extension.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    /// `len + max_shift` samples; the tail repeats the head.
    samples: Vec<f32>,
    len: usize,
    max_shift: usize,
}

impl Signal {
    /// Take ownership of `samples` and append the wrap-around tail.
    pub fn from_samples(mut samples: Vec<f32>, max_shift: usize) -> Result<Self> {
        let len = samples.len();
        if len == 0 {
            return Err(Error::Config("signal is empty".into()));
        }
        if max_shift > len {
            return Err(Error::Config(format!(
                "max shift {} exceeds signal length {}",
                max_shift, len
            )));
        }

        samples.reserve_exact(max_shift);
        samples.extend_from_within(..max_shift);

        Ok(Self {
            samples,
            len,
            max_shift,
        })
    }

    /// Number of real samples (N).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false for a constructed signal.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length of the wrap-around tail.
    pub fn max_shift(&self) -> usize {
        self.max_shift
    }

    /// The real samples, without the tail.
    pub fn samples(&self) -> &[f32] {
        &self.samples[..self.len]
    }

    /// Samples followed by the tail (`len + max_shift` values).
    pub fn extended(&self) -> &[f32] {
        &self.samples
    }

    /// Sample at `index mod len`.
    pub fn wrapped(&self, index: usize) -> f32 {
        self.samples[index % self.len]
    }
}
