//! `wdn-core` — foundational types for the `rust_wdn` water-network toolkit.
//!
//! This crate is a dependency of every other `wdn-*` crate.  It intentionally
//! has no `wdn-*` dependencies and minimal external ones (only `rustc-hash`
//! and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`                                              |
//! | [`labels`]      | `LabelTable` (string label ↔ dense id interner)       |
//! | [`config`]      | `AllocationConfig`, `PilferageConfig`, `DetectConfig` |
//! | [`error`]       | `WdnError`, `WdnResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod labels;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AllocationConfig, DetectConfig, PilferageConfig};
pub use error::{WdnError, WdnResult};
pub use ids::NodeId;
pub use labels::LabelTable;
