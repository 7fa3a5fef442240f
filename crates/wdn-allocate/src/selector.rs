//! Four-stage sensor placement heuristic.
//!
//! # Stages
//!
//! 1. **Initial sensors** — nodes that are the nearest neighbor of more than
//!    one other node.  A convergence point like that is a natural place to
//!    monitor several nodes at once.
//! 2. **Left-out rescue** — any node whose nearest neighbor did not become a
//!    sensor is added itself, so every mapped node is a sensor or sits one
//!    hop from one.  Indirection is never chased further than that.
//! 3. **Redundancy removal** — a sensor all of whose graph neighbors are
//!    also sensors adds no unique coverage.  Redundancy is judged against
//!    the full pre-prune set in a single pass and removals land as one
//!    batch; a sensor pair that covers only each other is removed together
//!    even though iterative pruning would have kept one of them.  Known
//!    limitation, kept to match the established heuristic.
//! 4. **Mapping** — each remaining non-sensor node is assigned to its
//!    nearest-map target.  When stage 3 pruned that target, the pair is
//!    reported in [`Allocation::stale`] instead of being passed off as
//!    valid coverage.
//!
//! The whole pipeline is a pure function of the graph and the nearest map:
//! no hidden state, identical output on every run.

use rustc_hash::FxHashSet;

use wdn_core::NodeId;
use wdn_network::PipeGraph;

use crate::nearest::NearestMap;

// ── Result types ──────────────────────────────────────────────────────────────

/// One node → covering-sensor assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coverage {
    pub node:   NodeId,
    /// The covering sensor — or, for entries in [`Allocation::stale`], the
    /// pruned node the mapping still points at.
    pub sensor: NodeId,
}

/// Final output of the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// The sensor set, ascending by id.
    pub sensors:  Vec<NodeId>,
    /// Valid coverage: every `sensor` here is a member of `sensors`.
    pub coverage: Vec<Coverage>,
    /// Mappings whose target was pruned in stage 3.  Non-empty `stale`
    /// means the heuristic left these nodes without a live sensor.
    pub stale:    Vec<Coverage>,
}

impl Allocation {
    /// `true` when every mapped node points at a live sensor.
    pub fn is_consistent(&self) -> bool {
        self.stale.is_empty()
    }

    pub fn is_sensor(&self, node: NodeId) -> bool {
        self.sensors.binary_search(&node).is_ok()
    }

    pub fn sensor_count(&self) -> usize {
        self.sensors.len()
    }
}

// ── Stages ────────────────────────────────────────────────────────────────────

/// Stage 1: nodes with nearest-map in-degree above one.
pub fn initial_sensors(nearest: &NearestMap) -> FxHashSet<NodeId> {
    let mut in_degree = vec![0u32; nearest.node_count()];
    for (_, target) in nearest.iter() {
        in_degree[target.index()] += 1;
    }

    in_degree
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 1)
        .map(|(i, _)| NodeId(i as u32))
        .collect()
}

/// Stage 2: nodes whose nearest neighbor is not in `sensors`.
///
/// The caller unions the result into the sensor set; the rescued node hosts
/// a sensor itself rather than chasing coverage through a second hop.
pub fn rescue_left_out(nearest: &NearestMap, sensors: &FxHashSet<NodeId>) -> FxHashSet<NodeId> {
    nearest
        .iter()
        .filter(|(_, target)| !sensors.contains(target))
        .map(|(node, _)| node)
        .collect()
}

/// Stage 3: remove sensors whose graph neighbors are all sensors.
///
/// Redundancy is computed once against the set as passed in; the batch is
/// then removed with no re-evaluation (see module docs for the consequence).
pub fn prune_redundant(graph: &PipeGraph, sensors: &mut FxHashSet<NodeId>) {
    let redundant: Vec<NodeId> = sensors
        .iter()
        .copied()
        .filter(|&s| graph.neighbors(s).all(|(neighbor, _)| sensors.contains(&neighbor)))
        .collect();

    for s in redundant {
        sensors.remove(&s);
    }
}

/// Stage 4: map every non-sensor node to its nearest-map target.
///
/// Returns `(coverage, stale)`: entries whose target survived pruning, and
/// entries whose target did not.
pub fn map_to_sensors(
    nearest: &NearestMap,
    sensors: &FxHashSet<NodeId>,
) -> (Vec<Coverage>, Vec<Coverage>) {
    let mut coverage = Vec::new();
    let mut stale    = Vec::new();

    for (node, target) in nearest.iter() {
        if sensors.contains(&node) {
            continue;
        }
        let entry = Coverage { node, sensor: target };
        if sensors.contains(&target) {
            coverage.push(entry);
        } else {
            stale.push(entry);
        }
    }

    (coverage, stale)
}

// ── Driver ────────────────────────────────────────────────────────────────────

/// Run all four stages and assemble the final [`Allocation`].
pub fn allocate(graph: &PipeGraph, nearest: &NearestMap) -> Allocation {
    let mut sensors = initial_sensors(nearest);
    let rescued = rescue_left_out(nearest, &sensors);
    sensors.extend(rescued);

    prune_redundant(graph, &mut sensors);

    let (coverage, stale) = map_to_sensors(nearest, &sensors);

    let mut sensor_list: Vec<NodeId> = sensors.into_iter().collect();
    sensor_list.sort_unstable();

    Allocation {
        sensors: sensor_list,
        coverage,
        stale,
    }
}
