//! Splitting a signal into per-worker chunks.
//!
//! Each worker owns `chunk_size = len / workers` contiguous samples plus a
//! copy of the `max_shift` samples that follow them. The lookahead comes from
//! the next worker's region, or from the signal's wrap-around tail for the
//! last worker, so every lag product `chunk[i] * chunk[i + s]` stays inside the
//! worker's own buffer.
//!
//! When `len` is not a multiple of `workers`, the trailing `len % workers`
//! samples never start a lag window. They still appear as lookahead for the
//! last worker.

use crate::{Error, Result, Signal};

/// Chunk geometry shared by every worker of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    num_elements: usize,
    workers: usize,
    chunk_size: usize,
    max_shift: usize,
}

impl Partition {
    /// Compute the geometry for `workers` chunks over `num_elements` samples.
    ///
    /// Fails with a configuration error if the split can not give every
    /// worker at least one exclusive sample, or the lag range is larger than
    /// the signal.
    pub fn new(num_elements: usize, workers: usize, max_shift: usize) -> Result<Self> {
        if workers == 0 {
            return Err(Error::Config("worker count must be at least 1".into()));
        }
        if max_shift == 0 || max_shift > num_elements {
            return Err(Error::Config(format!(
                "max shift {} must be in 1..={}",
                max_shift, num_elements
            )));
        }

        let chunk_size = num_elements / workers;
        if chunk_size == 0 {
            return Err(Error::Config(format!(
                "{} workers for {} samples leaves empty chunks",
                workers, num_elements
            )));
        }

        Ok(Self {
            num_elements,
            workers,
            chunk_size,
            max_shift,
        })
    }

    /// Geometry for `signal`, using its full tail as the lag range.
    pub fn for_signal(signal: &Signal, workers: usize) -> Result<Self> {
        Self::new(signal.len(), workers, signal.max_shift())
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Exclusive samples per worker.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn max_shift(&self) -> usize {
        self.max_shift
    }

    /// Samples held by each chunk, exclusive region plus lookahead.
    pub fn chunk_len(&self) -> usize {
        self.chunk_size + self.max_shift
    }

    /// First sample index owned by `worker`.
    pub fn start(&self, worker: usize) -> usize {
        worker * self.chunk_size
    }

    /// Samples that start a lag window across all workers.
    pub fn covered(&self) -> usize {
        self.workers * self.chunk_size
    }

    /// Trailing samples excluded by the integer division.
    pub fn dropped(&self) -> usize {
        self.num_elements - self.covered()
    }

    /// Copy `worker`'s chunk out of `signal`.
    ///
    /// # Panics
    /// If `worker >= workers()`, or `signal` is shorter than this geometry.
    pub fn extract(&self, signal: &Signal, worker: usize) -> Chunk {
        assert!(worker < self.workers, "worker {} out of range", worker);
        let start = self.start(worker);
        let samples = signal.extended()[start..start + self.chunk_len()].to_vec();

        Chunk {
            worker,
            start,
            chunk_size: self.chunk_size,
            samples,
        }
    }

    /// Copy every worker's chunk, in worker order.
    pub fn split(&self, signal: &Signal) -> Vec<Chunk> {
        (0..self.workers).map(|w| self.extract(signal, w)).collect()
    }
}

/// One worker's private slice of the signal.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    worker: usize,
    start: usize,
    chunk_size: usize,
    /// `chunk_size` exclusive samples followed by the lookahead.
    samples: Vec<f32>,
}

impl Chunk {
    pub fn worker(&self) -> usize {
        self.worker
    }

    /// Index of the first exclusive sample in the full signal.
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Lag range this chunk supports.
    pub fn max_shift(&self) -> usize {
        self.samples.len() - self.chunk_size
    }

    /// Exclusive region followed by the lookahead.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Read-only copy of the samples following the exclusive region.
    pub fn lookahead(&self) -> &[f32] {
        &self.samples[self.chunk_size..]
    }
}
