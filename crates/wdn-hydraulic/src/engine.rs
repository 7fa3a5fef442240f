//! The `HydraulicEngine` trait and its output types.
//!
//! # Pluggability
//!
//! Reporting code consumes hydraulic results through the [`HydraulicEngine`]
//! trait, so a binding to a full solver (EPANET-class, with extended-period
//! simulation) can be swapped in without touching anything downstream.  The
//! in-repo [`SyntheticEngine`](crate::SyntheticEngine) is sufficient for
//! demos and tests.
//!
//! Sensor allocation never reads pressures or flows — engine output feeds
//! reporting only.

use wdn_network::InpDocument;

use crate::HydraulicResult;

// ── Output types ──────────────────────────────────────────────────────────────

/// Ordered pressure samples for one node over the simulated period.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureSeries(Vec<f64>);

impl PressureSeries {
    pub fn new(samples: Vec<f64>) -> Self {
        Self(samples)
    }

    pub fn samples(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Arithmetic mean of the series, or `None` for an empty series.
    pub fn mean(&self) -> Option<f64> {
        if self.0.is_empty() {
            return None;
        }
        Some(self.0.iter().sum::<f64>() / self.0.len() as f64)
    }
}

/// Pressure series for one node, keyed by source-document label.
#[derive(Debug, Clone, PartialEq)]
pub struct NodePressure {
    pub node:   String,
    pub series: PressureSeries,
}

/// Link endpoints as confirmed by the engine, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEnds {
    pub id:    String,
    pub start: String,
    pub end:   String,
}

/// Everything an engine run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutput {
    /// Per-node pressure series, in document junction order.
    pub pressures: Vec<NodePressure>,
    /// Link topology echoed back from the document.
    pub links:     Vec<LinkEnds>,
}

// ── Engine trait ──────────────────────────────────────────────────────────────

/// A hydraulic solver viewed as a black box: document in, per-node pressure
/// series and link topology out.
pub trait HydraulicEngine {
    fn run(&self, doc: &InpDocument) -> HydraulicResult<SimulationOutput>;
}
