//! A complete autocorrelation run: load, correlate, report, export.
//!
//! Phases advance `Init → Load → Partition → Compute → Reduce → Report →
//! Export → Done` with no retries. Partition, Compute and Reduce are walked by
//! [`CorrelationEngine::run`]; the run enters the rest itself and records the
//! last one in [`RunOutcome::phase`]. Any failure up to and including the
//! correlation aborts the run; a failed plot export is logged and kept in the
//! outcome, and the run still completes.

use crate::builder::{AutocorrRunBuilder, RunConfig};
use crate::core::{
    load_signal, verify, CorrelationEngine, GlobalSums, RunPhase, ThroughputReport,
    Verification, DEFAULT_TOLERANCE,
};
use crate::export::{export_plot, ExportError};
use crate::Result;

/// Configured run, ready to execute once.
pub struct AutocorrRun {
    config: RunConfig,
    engine: CorrelationEngine,
    phase: RunPhase,
}

/// What a finished run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub report: ThroughputReport,
    pub sums: GlobalSums,
    /// Strongest periodic lag, if the sums oscillate.
    pub dominant_lag: Option<usize>,
    /// Rows written to the plot file; `None` if skipped or failed.
    pub plot_rows: Option<usize>,
    /// Why the plot export failed. Never fatal.
    pub plot_error: Option<ExportError>,
    pub verification: Option<Verification>,
    /// Phase the run ended in; always [`RunPhase::Done`] on success.
    pub phase: RunPhase,
}

impl AutocorrRun {
    pub fn builder() -> AutocorrRunBuilder {
        AutocorrRunBuilder::default()
    }

    pub(crate) fn new(config: RunConfig, engine: CorrelationEngine) -> Self {
        Self {
            config,
            engine,
            phase: RunPhase::Init,
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Resolved worker count.
    pub fn workers(&self) -> usize {
        self.engine.workers()
    }

    fn enter(&mut self, phase: RunPhase) {
        tracing::debug!("Run phase {} -> {}", self.phase, phase);
        self.phase = phase;
    }

    pub fn execute(mut self) -> Result<RunOutcome> {
        let correlation_config = self.config.correlation;

        self.enter(RunPhase::Load);
        let signal = load_signal(
            &self.config.input,
            self.config.format,
            correlation_config.num_elements,
            correlation_config.max_shift,
        )?;

        self.enter(RunPhase::Partition);
        let result = self.engine.run(&signal)?;

        self.enter(RunPhase::Report);
        let report = result.report();
        tracing::info!("{}", report);

        let dominant_lag = result.sums().dominant_lag();
        if let Some(lag) = dominant_lag {
            tracing::info!("Strongest periodic component at lag {}", lag);
        }

        let verification = self.config.verify.then(|| {
            let check = verify(&signal, &result, DEFAULT_TOLERANCE);
            if check.passed() {
                tracing::info!(
                    "Verified against reference: max relative error {:.2e}",
                    check.max_relative_error
                );
            } else {
                tracing::warn!(
                    "Reference mismatch: max relative error {:.2e} at lag {} (tolerance {:.0e})",
                    check.max_relative_error,
                    check.worst_lag,
                    check.tolerance
                );
            }
            check
        });

        self.enter(RunPhase::Export);
        let (plot_rows, plot_error) = match &self.config.plot {
            Some((path, options)) => match export_plot(path, result.sums().as_slice(), options) {
                Ok(rows) => (Some(rows), None),
                Err(e) => {
                    tracing::warn!("Cannot write plot file '{}': {}", path.display(), e);
                    (None, Some(e))
                }
            },
            None => (None, None),
        };

        self.enter(RunPhase::Done);
        Ok(RunOutcome {
            report,
            sums: result.into_sums(),
            dominant_lag,
            plot_rows,
            plot_error,
            verification,
            phase: self.phase,
        })
    }
}
