//! `wdn-detect` — anomaly detection over sensor readings.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`pilferage`] | flow table loading, percentile thresholds, classification   |
//! | [`leak`]      | `StandardScaler`, `LeakModel` seam, `ModelContext`          |
//! | [`error`]     | `DetectError`, `DetectResult<T>`                            |
//!
//! Both detectors consume sensor readings produced downstream of the
//! allocation pipeline; neither feeds back into sensor placement.

pub mod error;
pub mod leak;
pub mod pilferage;


pub use error::{DetectError, DetectResult};
pub use leak::{
    load_pressure_records, CentroidModel, LeakAssessment, LeakModel, ModelContext, PressureRecord,
    StandardScaler,
};
pub use pilferage::{
    classify, classify_flow, load_flow_records, FlowClass, FlowRecord, FlowThresholds,
    PilferageReport,
};
