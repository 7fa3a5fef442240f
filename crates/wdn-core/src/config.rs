//! Run configuration.
//!
//! Plain structs with documented fields and `Default` impls holding the
//! operational defaults.  Applications that read these from a TOML/JSON file
//! can enable the `serde` feature and deserialize directly.

// ── AllocationConfig ──────────────────────────────────────────────────────────

/// Configuration for graph construction and sensor allocation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocationConfig {
    /// Nodes with declared elevation **strictly above** this value are
    /// excluded from the allocation graph (high-elevation junctions are
    /// poor sensor hosts).  Nodes exactly at the threshold are kept.
    pub elevation_threshold: f64,

    /// Weight assigned to every adjacency edge.  Uniform weighting treats
    /// each pipe hop as equal distance; callers with real pipe lengths or
    /// hydraulic resistance can supply those per-link through the builder
    /// instead.  Must be positive.
    pub edge_weight: f64,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            elevation_threshold: 100.0,
            edge_weight: 1.0,
        }
    }
}

// ── PilferageConfig ───────────────────────────────────────────────────────────

/// Percentile cut points for flow-based pilferage classification.
///
/// Quantiles are fractions in `[0, 1]` and must be ascending:
/// `warning_q < high_risk_q < pilferage_q`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PilferageConfig {
    pub warning_q:   f64,
    pub high_risk_q: f64,
    pub pilferage_q: f64,
}

impl Default for PilferageConfig {
    fn default() -> Self {
        Self {
            warning_q:   0.85,
            high_risk_q: 0.90,
            pilferage_q: 0.95,
        }
    }
}

// ── DetectConfig ──────────────────────────────────────────────────────────────

/// Leak-assessment configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectConfig {
    /// A node is reported as leaking when its predicted leak probability
    /// exceeds this value.  The operational default is deliberately low —
    /// field teams prefer false positives over missed leaks.
    pub leak_threshold: f64,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            leak_threshold: 1e-4,
        }
    }
}
