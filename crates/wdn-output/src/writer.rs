//! The `ReportWriter` trait implemented by all backend writers.

use crate::{CoverageRow, OutputResult, SensorRow};

/// Trait implemented by the CSV and SQLite report writers.
pub trait ReportWriter {
    /// Write the selected sensor nodes.
    fn write_sensors(&mut self, rows: &[SensorRow]) -> OutputResult<()>;

    /// Write valid node → sensor coverage assignments.
    fn write_coverage(&mut self, rows: &[CoverageRow]) -> OutputResult<()>;

    /// Write assignments whose target sensor was pruned — diagnostics, kept
    /// apart from valid coverage.
    fn write_stale(&mut self, rows: &[CoverageRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
