pub mod dijkstra;
pub mod taxi_routing;

pub use dijkstra::{ShortestPath, shortest_path};
pub use taxi_routing::estimate_route;
