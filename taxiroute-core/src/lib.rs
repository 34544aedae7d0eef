//! Taxi time estimation over an airport taxiway network.
//!
//! The crate combines a Dijkstra shortest path over a directed, length
//! weighted taxiway graph with a pluggable delay predictor to produce a
//! total taxi time estimate for a pair of nodes.

pub mod error;
pub mod estimate;
pub mod loading;
pub mod model;
pub mod predict;
pub mod prelude;
pub mod request;
pub mod routing;

pub use error::Error;
pub use estimate::{AVG_TAXI_SPEED, Estimate, Metric, RouteResult, compose};
pub use loading::{AirportModelConfig, create_airport_model};
pub use model::{AirportModel, TaxiwayGraph};
pub use predict::{DelayModel, DelayPredictor, LinearDelayModel, WeatherEncoder};
pub use request::{RouteForm, RouteRequest};
pub use routing::{ShortestPath, estimate_route, shortest_path};

/// Node identifier of the taxiway network (OSM node id)
pub type NodeId = i64;

/// Rounds to two decimal places, the precision of every reported figure.
///
/// Rounds the exact binary value half to even, so `0.125` becomes `0.12`
/// and `2.675` (stored as `2.67499...`) becomes `2.67`.
pub(crate) fn round_hundredths(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.2}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_hundredths_ties_to_even() {
        assert_eq!(round_hundredths(0.125), 0.12);
        assert_eq!(round_hundredths(0.375), 0.38);
        assert_eq!(round_hundredths(-0.125), -0.12);
    }

    #[test]
    fn test_round_hundredths_uses_exact_value() {
        assert_eq!(round_hundredths(2.675), 2.67);
        assert_eq!(round_hundredths(1.005), 1.0);
        assert_eq!(round_hundredths(955.5), 955.5);
    }
}
