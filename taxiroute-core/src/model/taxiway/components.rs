//! Taxiway graph components - nodes and edges

use crate::NodeId;

/// Taxiway graph node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxiwayNode {
    /// OSM ID of the node
    pub id: NodeId,
}

/// Directed taxiway segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxiwayEdge {
    /// Segment length in meters, never negative
    pub length: f64,
}

impl TaxiwayEdge {
    pub fn length(&self) -> f64 {
        self.length
    }
}
