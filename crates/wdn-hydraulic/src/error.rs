//! Hydraulic-subsystem error type.

use thiserror::Error;

/// Errors produced by `wdn-hydraulic`.
#[derive(Debug, Error)]
pub enum HydraulicError {
    /// A backing solver failed (licence, convergence, binding error, …).
    /// The synthetic engine never returns this.
    #[error("engine error: {0}")]
    Engine(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type HydraulicResult<T> = Result<T, HydraulicError>;
