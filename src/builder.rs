//! Builder for configuring and constructing an `AutocorrRun`.

use crate::core::{CorrelationConfig, CorrelationEngine, ReduceStrategy, SignalFormat};
use crate::export::{PlotLayout, PlotOptions};
use crate::{AutocorrRun, Result};
use std::path::PathBuf;

/// Default input file.
pub const DEFAULT_INPUT: &str = "bigsignal.bin";

/// Default plot file.
pub const DEFAULT_PLOT: &str = "plot.csv";

/// Everything a run needs, resolved by [`AutocorrRunBuilder::build`].
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub format: SignalFormat,
    pub correlation: CorrelationConfig,
    /// `None` skips the plot export.
    pub plot: Option<(PathBuf, PlotOptions)>,
    /// Compare the result against the single-threaded reference.
    pub verify: bool,
}

/// The input format is inferred from the file extension unless set
/// explicitly. Sizes and worker count are checked in `build()`, before any
/// file is opened.
///
/// # Example
///
/// ```ignore
/// use autocorr::prelude::*;
///
/// let outcome = AutocorrRun::builder()
///     .input("bigsignal.txt")
///     .format(SignalFormat::Text)
///     .workers(8)
///     .plot("plot.csv")
///     .build()?
///     .execute()?;
///
/// println!("{}", outcome.report);
/// ```
pub struct AutocorrRunBuilder {
    input: PathBuf,
    format: Option<SignalFormat>,
    correlation: CorrelationConfig,
    plot: Option<PathBuf>,
    plot_options: PlotOptions,
    verify: bool,
}

impl Default for AutocorrRunBuilder {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            format: None,
            correlation: CorrelationConfig::default(),
            plot: Some(PathBuf::from(DEFAULT_PLOT)),
            plot_options: PlotOptions::default(),
            verify: false,
        }
    }
}

impl AutocorrRunBuilder {
    /// Default: `bigsignal.bin`
    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = path.into();
        self
    }

    pub fn format(mut self, format: SignalFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Default: 8 * 1024 * 1024
    pub fn num_elements(mut self, n: usize) -> Self {
        self.correlation.num_elements = n;
        self
    }

    /// Default: 1024
    pub fn max_shift(mut self, lags: usize) -> Self {
        self.correlation.max_shift = lags;
        self
    }

    /// Override the worker count (default: available parallelism).
    pub fn workers(mut self, count: usize) -> Self {
        self.correlation.workers = Some(count);
        self
    }

    pub fn reduce(mut self, strategy: ReduceStrategy) -> Self {
        self.correlation.reduce = strategy;
        self
    }

    /// Log a debug line as each worker starts.
    pub fn trace_workers(mut self, enabled: bool) -> Self {
        self.correlation.trace_workers = enabled;
        self
    }

    /// Default: `plot.csv`
    pub fn plot(mut self, path: impl Into<PathBuf>) -> Self {
        self.plot = Some(path.into());
        self
    }

    pub fn no_plot(mut self) -> Self {
        self.plot = None;
        self
    }

    /// Default: 400
    pub fn max_plot(mut self, max_plot: usize) -> Self {
        self.plot_options.max_plot = max_plot;
        self
    }

    pub fn plot_layout(mut self, layout: PlotLayout) -> Self {
        self.plot_options.layout = layout;
        self
    }

    pub fn verify(mut self, enabled: bool) -> Self {
        self.verify = enabled;
        self
    }

    pub fn build(self) -> Result<AutocorrRun> {
        // Starts the worker pool; fails on bad sizes or worker count.
        let engine = CorrelationEngine::new(self.correlation)?;

        let format = self
            .format
            .unwrap_or_else(|| SignalFormat::from_path(&self.input));

        let config = RunConfig {
            input: self.input,
            format,
            correlation: self.correlation,
            plot: self.plot.map(|path| (path, self.plot_options)),
            verify: self.verify,
        };

        Ok(AutocorrRun::new(config, engine))
    }
}
