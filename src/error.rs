use thiserror::Error;

/// Error type for this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MatrixError {
    /// The input file could not be opened or read.
    #[error("could not read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The leading dimension token is missing or not a positive integer.
    #[error("first value in input must be a positive integer N")]
    BadDimension,
    /// A matrix element token is not an integer.
    #[error("'{0}' is not an integer")]
    BadToken(String),
    /// The input ran out before a full matrix was read.
    #[error("not enough matrix data: expected {expected} values, found {found}")]
    NotEnoughData { expected: usize, found: usize },
    /// Addition or multiplication on matrices of differing sizes.
    #[error("matrix sizes do not match for {op}: {left} vs {right}")]
    SizeMismatch {
        op: &'static str,
        left: usize,
        right: usize,
    },
    /// Errors coming from `serde_json` while writing a report.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
