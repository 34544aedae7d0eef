use std::collections::BinaryHeap;

use hashbrown::HashMap;
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use super::state::State;
use crate::{NodeId, model::TaxiwayGraph, round_hundredths};

/// Least total length path between two taxiway nodes
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Node ids from start to end, both inclusive
    pub nodes: Vec<NodeId>,
    /// Summed edge length in meters, rounded to two decimals
    pub length: f64,
}

/// Dijkstra's algorithm from `start` to `end` respecting edge direction.
///
/// Returns `None` when either node is not part of the graph or `end` cannot
/// be reached from `start`. A request with `start == end` for a known node is
/// the trivial path of length zero.
pub fn shortest_path(graph: &TaxiwayGraph, start: NodeId, end: NodeId) -> Option<ShortestPath> {
    let source = graph.node_index(start)?;
    let target = graph.node_index(end)?;

    let estimated_nodes = graph.node_count().min(1000);
    let mut distances: HashMap<NodeIndex, f64> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::with_capacity(estimated_nodes / 4);

    // Start node has distance 0
    heap.push(State {
        cost: 0.0,
        node: source,
    });
    distances.insert(source, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        if node == target {
            break;
        }

        // Skip if we've found a better path
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        for edge in graph.graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + edge.weight().length();

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                    predecessors.insert(next, node);
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                        predecessors.insert(next, node);
                    }
                }
            }
        }
    }

    let &length = distances.get(&target)?;

    // Follow predecessors backward from target to start
    let mut node_path = vec![target];
    let mut current = target;
    while current != source {
        current = *predecessors.get(&current)?;
        node_path.push(current);
    }
    node_path.reverse();

    Some(ShortestPath {
        nodes: node_path.into_iter().map(|idx| graph.node_id(idx)).collect(),
        length: round_hundredths(length),
    })
}
