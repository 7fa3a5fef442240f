//! Pipe-network adjacency graph and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for adjacency.
//! Given a `NodeId n`, its incident edges occupy the slice:
//!
//! ```text
//! edge_to[ node_adj_start[n] .. node_adj_start[n+1] ]
//! ```
//!
//! The edge arrays (`edge_to`, `edge_weight`) are sorted by source node.
//! Iteration over a node's neighbors is a contiguous memory scan.
//!
//! # Neighbor order
//!
//! `build()` uses a **stable** sort, so the neighbors of each node keep the
//! order in which their edges were added.  Nearest-neighbor resolution breaks
//! weight ties by taking the first minimal entry, which makes this ordering
//! part of the graph's contract: for a document-loaded network it is the link
//! order of the source document.

use wdn_core::NodeId;

// ── PipeGraph ─────────────────────────────────────────────────────────────────

/// Undirected weighted pipe graph in CSR format.
///
/// "Undirected" by construction: every water main contributes one directed
/// edge in each direction with the same weight.  Immutable after `build()`;
/// use [`PipeGraphBuilder`] to construct.
#[derive(Debug, Clone)]
pub struct PipeGraph {
    /// CSR row pointer.  Incident edges of node `n` occupy positions
    /// `node_adj_start[n] .. node_adj_start[n+1]` in the edge arrays.
    /// Length = `node_count + 1`.
    node_adj_start: Vec<u32>,

    /// Destination node of each edge, in per-source insertion order.
    edge_to: Vec<NodeId>,

    /// Weight of each edge.  Always positive.
    edge_weight: Vec<f64>,
}

impl PipeGraph {
    /// Construct an empty graph with no nodes or edges.
    pub fn empty() -> Self {
        PipeGraphBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_adj_start.len() - 1
    }

    /// Number of *directed* edges — twice the number of surviving links.
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over `(neighbor, weight)` pairs of `node`, in edge insertion
    /// order.
    ///
    /// This is a contiguous index scan — no heap allocation.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        let start = self.node_adj_start[node.index()] as usize;
        let end   = self.node_adj_start[node.index() + 1] as usize;
        (start..end).map(|i| (self.edge_to[i], self.edge_weight[i]))
    }

    /// Degree of `node` (number of incident directed edges).
    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        let start = self.node_adj_start[node.index()] as usize;
        let end   = self.node_adj_start[node.index() + 1] as usize;
        end - start
    }

    /// All node ids, `0..node_count`.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_count()).map(|i| NodeId(i as u32))
    }
}

// ── PipeGraphBuilder ──────────────────────────────────────────────────────────

/// Construct a [`PipeGraph`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts nodes and edges in any order.  `build()` sorts edges
/// by source node (stable, preserving per-node insertion order) and
/// constructs the CSR arrays.
///
/// # Example
///
/// ```
/// use wdn_network::PipeGraphBuilder;
///
/// let mut b = PipeGraphBuilder::new();
/// let a = b.add_node();
/// let c = b.add_node();
/// b.add_main(a, c, 1.0);
/// let graph = b.build();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 2); // both directions
/// ```
pub struct PipeGraphBuilder {
    node_count: u32,
    raw_edges:  Vec<RawEdge>,
}

struct RawEdge {
    from:   NodeId,
    to:     NodeId,
    weight: f64,
}

impl PipeGraphBuilder {
    pub fn new() -> Self {
        Self { node_count: 0, raw_edges: Vec::new() }
    }

    /// Pre-allocate for the expected number of directed edges to reduce
    /// reallocations when bulk-loading from a document.
    pub fn with_capacity(edges: usize) -> Self {
        Self {
            node_count: 0,
            raw_edges:  Vec::with_capacity(edges),
        }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId(self.node_count);
        self.node_count += 1;
        id
    }

    /// Add a single **directed** edge from `from` to `to`.
    ///
    /// `weight` must be positive.  Most callers want [`add_main`](Self::add_main).
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId, weight: f64) {
        debug_assert!(weight > 0.0, "edge weight must be positive, got {weight}");
        self.raw_edges.push(RawEdge { from, to, weight });
    }

    /// Add a water main between `a` and `b`: edges in **both directions**
    /// with the same weight.
    ///
    /// A self-loop (`a == b`) is stored as two directed self-edges; it is
    /// tolerated, not rejected.
    pub fn add_main(&mut self, a: NodeId, b: NodeId, weight: f64) {
        self.add_directed_edge(a, b, weight);
        self.add_directed_edge(b, a, weight);
    }

    pub fn node_count(&self) -> usize {
        self.node_count as usize
    }

    pub fn edge_count(&self) -> usize {
        self.raw_edges.len()
    }

    /// Consume the builder and produce a [`PipeGraph`].
    ///
    /// Time complexity: O(E log E) for the edge sort, where E = edges.
    pub fn build(self) -> PipeGraph {
        let node_count = self.node_count as usize;
        let edge_count = self.raw_edges.len();

        // Stable sort: per-node neighbor order must remain insertion order.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_to:     Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_weight: Vec<f64>    = raw.iter().map(|e| e.weight).collect();

        // Build CSR row pointer (node_adj_start).
        let mut node_adj_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_adj_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_adj_start[i] += node_adj_start[i - 1];
        }
        debug_assert_eq!(node_adj_start[node_count] as usize, edge_count);

        PipeGraph {
            node_adj_start,
            edge_to,
            edge_weight,
        }
    }
}

impl Default for PipeGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
