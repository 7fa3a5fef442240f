//! Detection-subsystem error type.

use thiserror::Error;

/// Errors produced by `wdn-detect`.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("flow table parse error: {0}")]
    Parse(String),

    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    #[error("training error: {0}")]
    Train(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DetectResult<T> = Result<T, DetectError>;
