pub use crate::Error;

// Graph and context
pub use crate::loading::{AirportModelConfig, create_airport_model};
pub use crate::model::{AirportModel, TaxiwayGraph};

// Routing and estimation
pub use crate::estimate::{AVG_TAXI_SPEED, Estimate, Metric, RouteResult};
pub use crate::request::{RouteForm, RouteRequest};
pub use crate::routing::{ShortestPath, estimate_route, shortest_path};

// Delay prediction
pub use crate::predict::{DelayModel, DelayPredictor, LinearDelayModel, WeatherEncoder};

pub use crate::NodeId;
