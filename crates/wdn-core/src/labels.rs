//! Label interner: source-document node labels ↔ dense [`NodeId`]s.
//!
//! Network documents identify nodes by free-form string labels (`"J-12"`,
//! `"Tank3"`).  Interning them to sequential `u32` ids keeps the graph and
//! every selector stage working on dense `Vec` indexes; the table resolves
//! ids back to labels on the reporting side.
//!
//! Ids are assigned in first-seen order, which makes every downstream
//! structure deterministic for a given input document.

use rustc_hash::FxHashMap;

use crate::NodeId;

/// Bidirectional label ↔ id table.
///
/// `intern` is the only mutating operation; once a label has an id, the id
/// never changes.
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelTable {
    labels:   Vec<String>,
    by_label: FxHashMap<String, NodeId>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `label`, assigning the next sequential id on first
    /// sight.
    pub fn intern(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.by_label.get(label) {
            return id;
        }
        let id = NodeId(self.labels.len() as u32);
        self.labels.push(label.to_owned());
        self.by_label.insert(label.to_owned(), id);
        id
    }

    /// Look up a previously interned label.
    pub fn get(&self, label: &str) -> Option<NodeId> {
        self.by_label.get(label).copied()
    }

    /// Resolve an id back to its label.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this table (out-of-range index).
    pub fn label(&self, id: NodeId) -> &str {
        &self.labels[id.index()]
    }

    /// Number of interned labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate `(id, label)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &str)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, s)| (NodeId(i as u32), s.as_str()))
    }
}
