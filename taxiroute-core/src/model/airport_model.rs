use crate::model::TaxiwayGraph;
use crate::predict::DelayPredictor;

/// Immutable estimation context built once at startup.
///
/// Holds the taxiway network and the delay predictor. Only `&self` access is
/// exposed, so a single instance can be shared between concurrent requests.
/// Replacing the graph or the predictor means building a new `AirportModel`
/// and swapping it as a whole.
#[derive(Debug)]
pub struct AirportModel {
    pub graph: TaxiwayGraph,
    pub predictor: DelayPredictor,
}

impl AirportModel {
    pub fn new(graph: TaxiwayGraph, predictor: DelayPredictor) -> Self {
        Self { graph, predictor }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn model_info(&self) -> String {
        format!(
            "{} nodes, {} edges, {} labels, delay model {}",
            self.graph.node_count(),
            self.graph.edge_count(),
            self.graph.label_count(),
            if self.predictor.is_available() {
                "available"
            } else {
                "unavailable"
            }
        )
    }
}
