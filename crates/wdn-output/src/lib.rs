//! `wdn-output` — allocation report writers for the rust_wdn toolkit.
//!
//! Two backends are provided, one behind a Cargo feature:
//!
//! | Feature   | Backend     | Files created                                              |
//! |-----------|-------------|------------------------------------------------------------|
//! | *(none)*  | CSV         | `sensor_nodes.csv`, `coverage_map.csv`, `stale_coverage.csv` |
//! | `sqlite`  | SQLite      | `report.db`                                                |
//!
//! Both implement [`ReportWriter`] and are driven by [`AllocationReport`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use wdn_output::{AllocationReport, CsvWriter};
//!
//! let mut writer = CsvWriter::new(Path::new("./reports"))?;
//! AllocationReport::new(&allocation, &network.labels).write_to(&mut writer)?;
//! ```

pub mod csv;
pub mod error;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use report::AllocationReport;
pub use row::{CoverageRow, SensorRow};
pub use writer::ReportWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
