//! # Autocorr Export
//!
//! Output side of an autocorrelation run:
//! - **Plot table**: `<lag>, <sum>` rows for lags `1..max_plot`
//! - **Signal files**: binary or text sample files readable by the loader
//!
//! ## Example
//!
//! ```ignore
//! use autocorr_export::{export_plot, PlotOptions};
//!
//! let rows = export_plot("plot.csv", sums.as_slice(), &PlotOptions::default())?;
//! ```

mod error;
mod options;
mod plot;
mod signal;

pub use error::{ExportError, Result};
pub use options::{PlotLayout, PlotOptions, DEFAULT_MAX_PLOT};
pub use plot::{export_plot, write_plot};
pub use signal::{export_signal, write_signal};
