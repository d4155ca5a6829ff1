//! Error types for rdaudit.

use thiserror::Error;

/// Main error type for rdaudit operations.
///
/// `InvalidInput` covers every violated precondition: empty sequences passed
/// to entropy/chi-square/the comparator, a lag that leaves fewer than one
/// sample pair, or a raw file whose length is not a whole number of words.
/// A mathematically indeterminate result (zero-variance autocorrelation) is
/// *not* an error; it is reported as the `f64::NAN` sentinel.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for rdaudit operations.
pub type Result<T> = std::result::Result<T, Error>;
