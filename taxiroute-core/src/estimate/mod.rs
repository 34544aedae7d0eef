//! Composition of path length and predicted delay into a taxi time estimate

pub mod compose;
pub mod result;

pub use compose::{AVG_TAXI_SPEED, compose, travel_time};
pub use result::{Estimate, Metric, RouteResult};
