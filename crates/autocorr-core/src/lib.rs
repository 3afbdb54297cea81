//! # Autocorr Core
//!
//! Data-parallel autocorrelation of a large one-dimensional signal over a
//! bounded lag range, used to expose a periodic component buried in noise.
//!
//! - **Signal store**: samples plus a wrap-around tail of `max_shift` values
//! - **Partitioner**: equal chunks per worker, each with a private lookahead copy
//! - **Local correlator**: per-lag `f32` sums over one chunk
//! - **Reducer**: merges partial sums, ordered or mutex-guarded
//! - **Engine**: worker pool, timing, and throughput
//!
//! ## Example
//!
//! ```rust
//! use autocorr_core::{CorrelationConfig, CorrelationEngine, HiddenSine, Signal};
//!
//! let samples = HiddenSine::new(64.0).generate(1 << 16);
//! let signal = Signal::from_samples(samples, 256).unwrap();
//!
//! let config = CorrelationConfig {
//!     workers: Some(4),
//!     ..CorrelationConfig::with_sizes(1 << 16, 256)
//! };
//! let engine = CorrelationEngine::new(config).unwrap();
//! let result = engine.run(&signal).unwrap();
//!
//! println!("{}", result.report());
//! ```

pub mod config;
pub mod correlator;
pub mod engine;
pub mod import;
pub mod partition;
pub mod reducer;
pub mod signal;
pub mod synth;
pub mod verify;

mod error;

pub use config::{CorrelationConfig, ReduceStrategy, DEFAULT_MAX_SHIFT, DEFAULT_NUM_ELEMENTS};
pub use correlator::{correlate_chunk, local_autocorrelation, reference_autocorrelation, PartialSums};
pub use engine::{Correlation, CorrelationEngine, RunPhase, ThroughputReport};
pub use error::{Error, Result};
pub use import::{load_signal, read_binary, read_text, SignalFormat};
pub use partition::{Chunk, Partition};
pub use reducer::{fold_ordered, GlobalSums, Reducer, PEAK_FRACTION};
pub use signal::Signal;
pub use synth::HiddenSine;
pub use verify::{verify, Verification, DEFAULT_TOLERANCE};
