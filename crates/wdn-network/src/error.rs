//! Network-subsystem error type.
//!
//! Document parsing itself is lenient and infallible; only the surrounding
//! I/O can fail.

use thiserror::Error;

/// Errors produced by `wdn-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
