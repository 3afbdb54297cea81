//! # Autocorr - Parallel Autocorrelation
//!
//! Computes the autocorrelation of a large signal over a bounded lag range
//! on a worker pool, to reveal a sine wave hidden in noise.
//!
//! ## Architecture
//!
//! Autocorr is an umbrella crate that coordinates:
//! - **autocorr-core** - Signal store, partitioner, local correlator, reducer, engine
//! - **autocorr-export** - Plot table and signal file writers
//!
//! ## Quick Start
//!
//! ```ignore
//! use autocorr::prelude::*;
//!
//! let outcome = AutocorrRun::builder()
//!     .input("bigsignal.bin")
//!     .max_shift(1024)
//!     .plot("plot.csv")
//!     .build()?
//!     .execute()?;
//!
//! println!("{}", outcome.report);
//! if let Some(lag) = outcome.dominant_lag {
//!     println!("hidden period: {} samples", lag);
//! }
//! ```

/// Re-export of autocorr-core for direct access
pub use autocorr_core as core;

/// Re-export of autocorr-export for direct access
pub use autocorr_export as export;

pub use autocorr_core::{
    CorrelationConfig, CorrelationEngine, GlobalSums, HiddenSine, ReduceStrategy, RunPhase,
    Signal, SignalFormat, ThroughputReport, Verification,
};
pub use autocorr_export::{PlotLayout, PlotOptions};

mod builder;
mod engine;
mod error;

pub use builder::{AutocorrRunBuilder, RunConfig, DEFAULT_INPUT, DEFAULT_PLOT};
pub use engine::{AutocorrRun, RunOutcome};
pub use error::{Error, Result};

/// Convenience prelude for common imports
pub mod prelude {
    pub use crate::{AutocorrRun, AutocorrRunBuilder, RunOutcome};
    pub use crate::{PlotLayout, PlotOptions, ReduceStrategy, SignalFormat};
    pub use crate::{Error, Result};
}
