//! Nearest-neighbor resolution.
//!
//! For each node the map holds its single lowest-weight neighbor.  Ties are
//! broken by neighbor-list order — the first minimal entry wins — which for
//! a document-loaded graph means the first link of the source document.
//! This makes the map deterministic for a given input, at the cost of being
//! input-order-dependent; that trade is deliberate and part of the contract.
//!
//! Nodes isolated by skip-set pruning have no neighbors, no map entry, and
//! take no part in sensor selection.

use wdn_core::NodeId;
use wdn_network::PipeGraph;

/// Per-node choice of the single lowest-weight neighbor.
///
/// Stored densely, indexed by `NodeId`, with `NodeId::INVALID` marking nodes
/// that have no surviving neighbor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearestMap {
    targets: Vec<NodeId>,
}

impl NearestMap {
    /// Resolve the nearest neighbor of every node in `graph`.
    pub fn from_graph(graph: &PipeGraph) -> Self {
        let mut targets = vec![NodeId::INVALID; graph.node_count()];

        for node in graph.nodes() {
            let mut best: Option<(NodeId, f64)> = None;
            for (neighbor, weight) in graph.neighbors(node) {
                // Strict `<` keeps the first minimal entry on ties.
                match best {
                    Some((_, best_weight)) if weight >= best_weight => {}
                    _ => best = Some((neighbor, weight)),
                }
            }
            if let Some((neighbor, _)) = best {
                targets[node.index()] = neighbor;
            }
        }

        NearestMap { targets }
    }

    /// Total number of slots (equals the graph's node count).
    pub fn node_count(&self) -> usize {
        self.targets.len()
    }

    /// The nearest neighbor of `node`, or `None` if it is isolated.
    pub fn get(&self, node: NodeId) -> Option<NodeId> {
        self.targets
            .get(node.index())
            .copied()
            .filter(|&t| t != NodeId::INVALID)
    }

    /// Number of nodes that resolved to a neighbor.
    pub fn len(&self) -> usize {
        self.targets.iter().filter(|&&t| t != NodeId::INVALID).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate `(node, nearest)` pairs in node-id order, skipping isolated
    /// nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.targets
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t != NodeId::INVALID)
            .map(|(i, &t)| (NodeId(i as u32), t))
    }
}
