//! `wdn-allocate` — sensor placement over the pipe graph.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`nearest`]  | `NearestMap` (per-node lowest-weight neighbor)           |
//! | [`selector`] | four-stage heuristic, `allocate`, `Allocation`           |
//!
//! # Usage
//!
//! ```rust,ignore
//! use wdn_allocate::{allocate, NearestMap};
//!
//! let nearest = NearestMap::from_graph(&network.graph);
//! let allocation = allocate(&network.graph, &nearest);
//! for &s in &allocation.sensors {
//!     println!("sensor at {}", network.labels.label(s));
//! }
//! ```
//!
//! The heuristic is greedy — it produces a small covering set, not a proven
//! minimum one.

pub mod nearest;
pub mod selector;

#[cfg(test)]
mod tests;

pub use nearest::NearestMap;
pub use selector::{
    allocate, initial_sensors, map_to_sensors, prune_redundant, rescue_left_out, Allocation,
    Coverage,
};
