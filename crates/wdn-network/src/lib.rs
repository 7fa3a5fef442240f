//! `wdn-network` — INP parsing, skip-set extraction, and the pipe graph.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`graph`]   | `PipeGraph` (CSR adjacency), `PipeGraphBuilder`             |
//! | [`inp`]     | `InpDocument` (lenient parser), `load_document`, `InpNetwork` |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Propagates serde derives through `wdn-core`.                 |

pub mod error;
pub mod graph;
pub mod inp;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use graph::{PipeGraph, PipeGraphBuilder};
pub use inp::{load_document, load_path, InpDocument, InpNetwork, JunctionRecord, LinkRecord};
