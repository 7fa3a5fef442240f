//! Plain data row types written by report backends.
//!
//! Rows carry resolved string labels, not `NodeId`s — report files must be
//! readable without the run's label table.

/// One selected sensor node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorRow {
    pub node: String,
}

/// One node → sensor assignment.
///
/// In a stale context, `sensor` names the pruned node the mapping still
/// points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageRow {
    pub node:   String,
    pub sensor: String,
}
