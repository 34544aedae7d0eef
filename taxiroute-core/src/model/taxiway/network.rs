use std::borrow::Cow;

use hashbrown::HashMap;
use itertools::Itertools;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::components::{TaxiwayEdge, TaxiwayNode};
use crate::{Error, NodeId};

/// Directed, length weighted taxiway graph with a readable label lookup.
///
/// Nodes exist only as endpoints of edges. Labels are kept separately, so a
/// label for an id that no edge references does not add a node.
#[derive(Debug, Clone, Default)]
pub struct TaxiwayGraph {
    pub(crate) graph: DiGraph<TaxiwayNode, TaxiwayEdge>,
    node_lookup: HashMap<NodeId, NodeIndex>,
    labels: HashMap<NodeId, String>,
}

impl TaxiwayGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the directed edge `from -> to`, replacing the length of an
    /// existing edge between the same ordered pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeight`] if `length` is negative, NaN or infinite.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, length: f64) -> Result<(), Error> {
        if !length.is_finite() || length < 0.0 {
            return Err(Error::InvalidWeight {
                from,
                to,
                weight: length,
            });
        }

        let source = self.ensure_node(from);
        let target = self.ensure_node(to);
        self.graph.update_edge(source, target, TaxiwayEdge { length });
        Ok(())
    }

    /// Sets the readable label of a node, last write wins
    pub fn set_label(&mut self, node: NodeId, label: impl Into<String>) {
        self.labels.insert(node, label.into());
    }

    /// All node ids referenced by an edge, ascending
    pub fn nodes(&self) -> Vec<NodeId> {
        self.node_lookup.keys().copied().sorted_unstable().collect()
    }

    /// All edges as `(from, to, length)` in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].id,
                self.graph[edge.target()].id,
                edge.weight().length,
            )
        })
    }

    /// Readable label of a node, or the id itself when no label is known
    pub fn label(&self, node: NodeId) -> Cow<'_, str> {
        match self.labels.get(&node) {
            Some(label) => Cow::Borrowed(label.as_str()),
            None => Cow::Owned(node.to_string()),
        }
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.node_lookup.contains_key(&node)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub(crate) fn node_index(&self, node: NodeId) -> Option<NodeIndex> {
        self.node_lookup.get(&node).copied()
    }

    pub(crate) fn node_id(&self, index: NodeIndex) -> NodeId {
        self.graph[index].id
    }

    fn ensure_node(&mut self, node: NodeId) -> NodeIndex {
        if let Some(&index) = self.node_lookup.get(&node) {
            return index;
        }
        let index = self.graph.add_node(TaxiwayNode { id: node });
        self.node_lookup.insert(node, index);
        index
    }
}
