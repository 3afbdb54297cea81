//! Parallel correlation engine.
//!
//! Builds one worker pool per run, hands each worker its own chunk, and
//! merges the partial sums. Workers share nothing mutable while they
//! correlate; the only synchronization is the reduction.

use crate::partition::Partition;
use crate::reducer::{fold_ordered, Reducer};
use crate::{
    correlate_chunk, CorrelationConfig, Error, GlobalSums, PartialSums, ReduceStrategy, Result,
    Signal,
};
use rayon::prelude::*;
use std::fmt;
use std::time::{Duration, Instant};

/// Stages of a correlation run, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Init,
    Load,
    Partition,
    Compute,
    Reduce,
    Report,
    Export,
    Done,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunPhase::Init => "init",
            RunPhase::Load => "load",
            RunPhase::Partition => "partition",
            RunPhase::Compute => "compute",
            RunPhase::Reduce => "reduce",
            RunPhase::Report => "report",
            RunPhase::Export => "export",
            RunPhase::Done => "done",
        };
        f.write_str(name)
    }
}

/// Runs the partition → correlate → reduce pipeline on a fixed worker pool.
pub struct CorrelationEngine {
    config: CorrelationConfig,
    workers: usize,
    pool: rayon::ThreadPool,
}

impl CorrelationEngine {
    /// Validate `config`, resolve the worker count, and start the pool.
    pub fn new(config: CorrelationConfig) -> Result<Self> {
        config.validate()?;
        let workers = config.resolve_workers()?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("autocorr-worker-{}", i))
            .build()?;

        Ok(Self {
            config,
            workers,
            pool,
        })
    }

    pub fn config(&self) -> &CorrelationConfig {
        &self.config
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Correlate `signal` over lags `0..max_shift`.
    ///
    /// The elapsed time covers chunk copies, correlation, and reduction only.
    pub fn run(&self, signal: &Signal) -> Result<Correlation> {
        let config = &self.config;
        if signal.len() != config.num_elements {
            return Err(Error::Config(format!(
                "signal has {} samples, expected {}",
                signal.len(),
                config.num_elements
            )));
        }
        if signal.max_shift() < config.max_shift {
            return Err(Error::Config(format!(
                "signal tail of {} samples can not cover {} lags",
                signal.max_shift(),
                config.max_shift
            )));
        }

        tracing::debug!(phase = %RunPhase::Partition, workers = self.workers);
        let partition = Partition::new(signal.len(), self.workers, config.max_shift)?;
        if partition.dropped() > 0 {
            tracing::debug!(
                "{} trailing samples excluded ({} not divisible by {} workers)",
                partition.dropped(),
                signal.len(),
                self.workers
            );
        }

        let start = Instant::now();
        tracing::debug!(phase = %RunPhase::Compute, chunk_size = partition.chunk_size());
        let sums = match config.reduce {
            ReduceStrategy::Ordered => {
                let partials = self.compute_all(signal, &partition);
                tracing::debug!(phase = %RunPhase::Reduce, contributions = partials.len());
                fold_ordered(partials, config.max_shift)
            }
            ReduceStrategy::Locked => self.compute_locked(signal, &partition),
        };
        let elapsed = start.elapsed();

        Ok(Correlation {
            sums,
            partition,
            num_elements: signal.len(),
            elapsed,
        })
    }

    /// One task per worker; partials come back in worker order.
    fn compute_all(&self, signal: &Signal, partition: &Partition) -> Vec<PartialSums> {
        self.pool.install(|| {
            (0..partition.workers())
                .into_par_iter()
                .map(|worker| self.correlate_worker(signal, partition, worker))
                .collect()
        })
    }

    /// Each worker adds its sums under the reducer's lock as it finishes.
    fn compute_locked(&self, signal: &Signal, partition: &Partition) -> GlobalSums {
        let reducer = Reducer::new(partition.max_shift());

        self.pool.scope(|scope| {
            for worker in 0..partition.workers() {
                let reducer = &reducer;
                scope.spawn(move |_| {
                    let partial = self.correlate_worker(signal, partition, worker);
                    reducer.contribute(&partial);
                });
            }
        });

        tracing::debug!(phase = %RunPhase::Reduce, contributions = reducer.contributions());
        debug_assert_eq!(reducer.contributions(), partition.workers());
        reducer.into_sums()
    }

    fn correlate_worker(&self, signal: &Signal, partition: &Partition, worker: usize) -> PartialSums {
        if self.config.trace_workers {
            tracing::debug!(
                worker,
                thread = ?rayon::current_thread_index(),
                "entered local autocorrelation"
            );
        }
        let chunk = partition.extract(signal, worker);
        correlate_chunk(&chunk)
    }
}

/// Result of one engine run.
#[derive(Debug, Clone)]
pub struct Correlation {
    sums: GlobalSums,
    partition: Partition,
    num_elements: usize,
    elapsed: Duration,
}

impl Correlation {
    pub fn sums(&self) -> &GlobalSums {
        &self.sums
    }

    pub fn into_sums(self) -> GlobalSums {
        self.sums
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    pub fn workers(&self) -> usize {
        self.partition.workers()
    }

    /// Wall-clock time of the parallel phase.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Millions of lag-sample products per second: `max_shift * N / seconds`.
    pub fn throughput(&self) -> f64 {
        let seconds = self.elapsed.as_secs_f64();
        if seconds <= 0.0 {
            return f64::INFINITY;
        }
        self.partition.max_shift() as f64 * self.num_elements as f64 / seconds / 1_000_000.0
    }

    pub fn report(&self) -> ThroughputReport {
        ThroughputReport {
            workers: self.workers(),
            num_elements: self.num_elements,
            mega_ops_per_sec: self.throughput(),
        }
    }
}

/// The one-line performance summary of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThroughputReport {
    pub workers: usize,
    pub num_elements: usize,
    /// Millions of lag-sample products per second.
    pub mega_ops_per_sec: f64,
}

impl fmt::Display for ThroughputReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:3} threads, {:10} elements, {:9.2} mega-autocorrelations computed per second",
            self.workers, self.num_elements, self.mega_ops_per_sec
        )
    }
}
