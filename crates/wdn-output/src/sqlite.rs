//! SQLite report backend (feature `sqlite`).
//!
//! Creates a single `report.db` file in the configured output directory with
//! two tables: `sensor_nodes` and `coverage_map`.  Stale assignments live in
//! `coverage_map` with `stale = 1`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::ReportWriter;
use crate::{CoverageRow, OutputResult, SensorRow};

/// Writes allocation reports to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `report.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("report.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS sensor_nodes (
                 node TEXT NOT NULL
             );
             CREATE TABLE IF NOT EXISTS coverage_map (
                 node   TEXT NOT NULL,
                 sensor TEXT NOT NULL,
                 stale  INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }

    fn insert_coverage(&mut self, rows: &[CoverageRow], stale: bool) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO coverage_map (node, sensor, stale) VALUES (?1, ?2, ?3)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.node, row.sensor, stale as i64])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}

impl ReportWriter for SqliteWriter {
    fn write_sensors(&mut self, rows: &[SensorRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached("INSERT INTO sensor_nodes (node) VALUES (?1)")?;
            for row in rows {
                stmt.execute(rusqlite::params![row.node])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_coverage(&mut self, rows: &[CoverageRow]) -> OutputResult<()> {
        self.insert_coverage(rows, false)
    }

    fn write_stale(&mut self, rows: &[CoverageRow]) -> OutputResult<()> {
        self.insert_coverage(rows, true)
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
