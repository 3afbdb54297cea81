//! Centralized error type for the autocorr umbrella crate.
//!
//! Wraps subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] autocorr_core::Error),

    #[error("Export: {0}")]
    Export(#[from] autocorr_export::ExportError),
}

pub type Result<T> = std::result::Result<T, Error>;
