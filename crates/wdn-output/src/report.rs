//! `AllocationReport` — resolves an allocation to labelled rows and drives a
//! writer.

use wdn_allocate::Allocation;
use wdn_core::LabelTable;

use crate::row::{CoverageRow, SensorRow};
use crate::writer::ReportWriter;
use crate::OutputResult;

/// A fully label-resolved allocation, ready for any [`ReportWriter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationReport {
    pub sensors:  Vec<SensorRow>,
    pub coverage: Vec<CoverageRow>,
    pub stale:    Vec<CoverageRow>,
}

impl AllocationReport {
    /// Resolve every id in `allocation` through `labels`.
    ///
    /// The table must be the one produced alongside the graph the
    /// allocation ran on; ids from any other run will panic or mislabel.
    pub fn new(allocation: &Allocation, labels: &LabelTable) -> Self {
        let sensors = allocation
            .sensors
            .iter()
            .map(|&s| SensorRow { node: labels.label(s).to_owned() })
            .collect();

        let resolve = |entries: &[wdn_allocate::Coverage]| -> Vec<CoverageRow> {
            entries
                .iter()
                .map(|c| CoverageRow {
                    node:   labels.label(c.node).to_owned(),
                    sensor: labels.label(c.sensor).to_owned(),
                })
                .collect()
        };

        Self {
            sensors,
            coverage: resolve(&allocation.coverage),
            stale:    resolve(&allocation.stale),
        }
    }

    /// Write all three row groups and finish the writer.
    pub fn write_to<W: ReportWriter>(&self, writer: &mut W) -> OutputResult<()> {
        writer.write_sensors(&self.sensors)?;
        writer.write_coverage(&self.coverage)?;
        writer.write_stale(&self.stale)?;
        writer.finish()
    }
}
