use log::{debug, warn};

use super::dijkstra::shortest_path;
use crate::estimate::{Metric, RouteResult, compose};
use crate::{AirportModel, RouteRequest};

/// Estimates the total taxi time for a request.
///
/// Runs the shortest path search and asks the predictor for a delay only
/// when a path exists. An unseen weather category makes the delay
/// unavailable for this request instead of failing it.
pub fn estimate_route(model: &AirportModel, request: &RouteRequest) -> RouteResult {
    let path = shortest_path(&model.graph, request.start, request.end);

    debug!(
        "Route {} -> {}: {}",
        request.start,
        request.end,
        path.as_ref()
            .map_or_else(|| "no path".to_string(), |p| format!("{} m", p.length))
    );

    let estimate = compose(path.as_ref().map(|p| p.length), || {
        match model
            .predictor
            .predict(request.time_of_day, request.traffic_level, &request.weather)
        {
            Ok(delay) => Metric::Value(delay),
            Err(e) => {
                warn!("Delay prediction failed: {e}");
                Metric::Unavailable
            }
        }
    });

    let nodes = path.map(|p| p.nodes).unwrap_or_default();
    let readable_path = nodes
        .iter()
        .map(|&node| model.graph.label(node).into_owned())
        .collect();

    RouteResult {
        path: nodes,
        readable_path,
        estimate,
    }
}
