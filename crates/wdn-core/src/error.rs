//! Toolkit error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `WdnError` via `From` impls, or keep them separate and wrap `WdnError` as
//! one variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.

use thiserror::Error;

use crate::NodeId;

/// The top-level error type for `wdn-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum WdnError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `wdn-*` crates.
pub type WdnResult<T> = Result<T, WdnError>;
