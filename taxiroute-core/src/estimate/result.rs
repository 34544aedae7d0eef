use std::fmt;

use serde::{Serialize, Serializer};

use crate::NodeId;

/// A reported figure that may be undefined.
///
/// Serializes as a number, `"No Path"` or `"N/A"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    Value(f64),
    /// End is unreachable from start
    NoPath,
    /// The figure cannot be computed for this request
    Unavailable,
}

impl Metric {
    pub fn is_value(self) -> bool {
        matches!(self, Self::Value(_))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value:.2}"),
            Self::NoPath => f.write_str("No Path"),
            Self::Unavailable => f.write_str("N/A"),
        }
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(value) => serializer.serialize_f64(*value),
            Self::NoPath => serializer.serialize_str("No Path"),
            Self::Unavailable => serializer.serialize_str("N/A"),
        }
    }
}

/// Distance and time figures of a single estimate. Times are in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    /// Path length in meters
    pub raw_distance: Metric,
    pub travel_time: Metric,
    pub predicted_delay: Metric,
    pub total_estimate: Metric,
}

/// Answer to a route request, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    pub path: Vec<NodeId>,
    /// Path with every node replaced by its readable label
    pub readable_path: Vec<String>,
    #[serde(flatten)]
    pub estimate: Estimate,
}
