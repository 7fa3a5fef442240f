//! CSV report backend.
//!
//! Creates three files in the configured output directory:
//! - `sensor_nodes.csv`
//! - `coverage_map.csv`
//! - `stale_coverage.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{CoverageRow, OutputResult, SensorRow};

/// Writes allocation reports to three CSV files.
pub struct CsvWriter {
    sensors:  Writer<File>,
    coverage: Writer<File>,
    stale:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut sensors = Writer::from_path(dir.join("sensor_nodes.csv"))?;
        sensors.write_record(["node"])?;

        let mut coverage = Writer::from_path(dir.join("coverage_map.csv"))?;
        coverage.write_record(["node", "sensor"])?;

        let mut stale = Writer::from_path(dir.join("stale_coverage.csv"))?;
        stale.write_record(["node", "sensor"])?;

        Ok(Self {
            sensors,
            coverage,
            stale,
            finished: false,
        })
    }
}

impl ReportWriter for CsvWriter {
    fn write_sensors(&mut self, rows: &[SensorRow]) -> OutputResult<()> {
        for row in rows {
            self.sensors.write_record([row.node.as_str()])?;
        }
        Ok(())
    }

    fn write_coverage(&mut self, rows: &[CoverageRow]) -> OutputResult<()> {
        for row in rows {
            self.coverage.write_record([row.node.as_str(), row.sensor.as_str()])?;
        }
        Ok(())
    }

    fn write_stale(&mut self, rows: &[CoverageRow]) -> OutputResult<()> {
        for row in rows {
            self.stale.write_record([row.node.as_str(), row.sensor.as_str()])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.sensors.flush()?;
        self.coverage.flush()?;
        self.stale.flush()?;
        Ok(())
    }
}
