//! Data rendered by the form page

use serde::Serialize;
use taxiroute_core::{NodeId, RouteResult, TaxiwayGraph};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeView {
    pub id: NodeId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeView {
    pub from: NodeId,
    pub to: NodeId,
    /// Edge length as displayed
    pub label: String,
}

/// Node and edge listing, computed once since the graph never changes
#[derive(Debug, Clone, Serialize)]
pub struct NetworkView {
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
}

impl NetworkView {
    pub fn new(graph: &TaxiwayGraph) -> Self {
        let nodes = graph
            .nodes()
            .into_iter()
            .map(|id| NodeView {
                id,
                label: graph.label(id).into_owned(),
            })
            .collect();
        let edges = graph
            .edges()
            .map(|(from, to, length)| EdgeView {
                from,
                to,
                label: format!("{length:?}"),
            })
            .collect();
        Self { nodes, edges }
    }
}

#[derive(Debug, Serialize)]
pub struct PageView<'a> {
    #[serde(flatten)]
    pub network: &'a NetworkView,
    pub result: Option<RouteResult>,
    pub error: Option<&'static str>,
}
