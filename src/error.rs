use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by network construction, training and configuration loading.
#[derive(Error, Debug)]
pub enum Error {
    /// A vector's length does not match the width the network expects.
    ///
    /// `what` names the vector (e.g. `"input"`, `"target"`).
    #[error("dimension mismatch for {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Layer widths do not chain, or the topology itself is degenerate.
    #[error("invalid topology: {0}")]
    Topology(String),

    /// A hyperparameter or dataset is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading or writing a configuration or dataset file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration or dataset file is not valid JSON for the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn dimension(what: &'static str, expected: usize, actual: usize) -> Error {
        Error::DimensionMismatch { what, expected, actual }
    }
}

/// Fails with `DimensionMismatch` unless `actual == expected`.
pub(crate) fn check_width(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::dimension(what, expected, actual))
    }
}
