//! Error types.

use thiserror::Error;

/// Error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid sizes or worker count. Raised before any chunk is allocated.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error while reading the input signal.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input held fewer samples than the configured signal length.
    #[error("Short read: expected {expected} samples, found {found}")]
    ShortRead { expected: usize, found: usize },

    /// A text-mode token that is not a decimal number.
    #[error("Invalid sample {index}: {token:?}")]
    Parse { index: usize, token: String },

    /// Failed to build the worker pool.
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type.
pub type Result<T> = std::result::Result<T, Error>;
