//! Flow-percentile pilferage classification.
//!
//! # CSV format
//!
//! One row per sensor node with its observed flow:
//!
//! ```csv
//! Sensor_Node,Flow
//! J4,9.5
//! J7,16.2
//! J9,31.0
//! ```
//!
//! # Classification
//!
//! Cut points are the 85th/90th/95th percentiles of the submitted flows
//! (configurable), interpolated linearly between order statistics.  Buckets
//! are half-open with inclusive lower bounds:
//!
//! | Bucket    | Interval            |
//! |-----------|---------------------|
//! | warning   | `p85 ≤ flow < p90`  |
//! | high-risk | `p90 ≤ flow < p95`  |
//! | pilferage | `flow ≥ p95`        |
//!
//! Flows below the warning cut point are unclassified — normal draw.

use std::io::Read;

use serde::Deserialize;

use wdn_core::PilferageConfig;

use crate::{DetectError, DetectResult};

// ── CSV record ────────────────────────────────────────────────────────────────

/// One `(sensor node, flow)` row of the submitted flow table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlowRecord {
    #[serde(rename = "Sensor_Node")]
    pub sensor_node: String,
    #[serde(rename = "Flow")]
    pub flow: f64,
}

/// Load flow rows from any `Read` source (file, HTTP body, test cursor).
pub fn load_flow_records<R: Read>(reader: R) -> DetectResult<Vec<FlowRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for result in csv_reader.deserialize::<FlowRecord>() {
        records.push(result.map_err(|e| DetectError::Parse(e.to_string()))?);
    }
    Ok(records)
}

// ── Thresholds ────────────────────────────────────────────────────────────────

/// The three percentile cut points for one batch of flows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowThresholds {
    pub warning:   f64,
    pub high_risk: f64,
    pub pilferage: f64,
}

impl FlowThresholds {
    /// Compute cut points from a batch of flow values.
    ///
    /// Returns [`DetectError::EmptyInput`] for an empty batch — percentiles
    /// of nothing are meaningless.
    pub fn from_flows(flows: &[f64], config: &PilferageConfig) -> DetectResult<Self> {
        if flows.is_empty() {
            return Err(DetectError::EmptyInput("no flow values"));
        }
        let mut sorted = flows.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        Ok(Self {
            warning:   quantile(&sorted, config.warning_q),
            high_risk: quantile(&sorted, config.high_risk_q),
            pilferage: quantile(&sorted, config.pilferage_q),
        })
    }
}

/// Linearly interpolated quantile of ascending `sorted`: the value at
/// fractional index `q · (n − 1)`.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos  = q.clamp(0.0, 1.0) * (n - 1) as f64;
    let lo   = pos.floor() as usize;
    let hi   = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

// ── Classification ────────────────────────────────────────────────────────────

/// Risk bucket for one flow value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowClass {
    Warning,
    HighRisk,
    Pilferage,
}

/// Bucket a single flow, `None` below the warning cut point.
pub fn classify_flow(flow: f64, thresholds: &FlowThresholds) -> Option<FlowClass> {
    if flow >= thresholds.pilferage {
        Some(FlowClass::Pilferage)
    } else if flow >= thresholds.high_risk {
        Some(FlowClass::HighRisk)
    } else if flow >= thresholds.warning {
        Some(FlowClass::Warning)
    } else {
        None
    }
}

/// Sensor nodes grouped by risk bucket, preserving input row order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PilferageReport {
    pub warning:   Vec<String>,
    pub high_risk: Vec<String>,
    pub pilferage: Vec<String>,
}

/// Classify a whole flow table against `thresholds`.
pub fn classify(records: &[FlowRecord], thresholds: &FlowThresholds) -> PilferageReport {
    let mut report = PilferageReport::default();
    for record in records {
        match classify_flow(record.flow, thresholds) {
            Some(FlowClass::Warning)   => report.warning.push(record.sensor_node.clone()),
            Some(FlowClass::HighRisk)  => report.high_risk.push(record.sensor_node.clone()),
            Some(FlowClass::Pilferage) => report.pilferage.push(record.sensor_node.clone()),
            None => {}
        }
    }
    report
}
