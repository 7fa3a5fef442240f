//! `wdn-hydraulic` — the hydraulic simulation seam.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`engine`]    | `HydraulicEngine` trait, `PressureSeries`, output types   |
//! | [`synthetic`] | `SyntheticEngine` (deterministic stand-in)                |
//! | [`error`]     | `HydraulicError`, `HydraulicResult<T>`                    |

pub mod engine;
pub mod error;
pub mod synthetic;


pub use engine::{HydraulicEngine, LinkEnds, NodePressure, PressureSeries, SimulationOutput};
pub use error::{HydraulicError, HydraulicResult};
pub use synthetic::SyntheticEngine;
