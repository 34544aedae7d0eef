use super::result::{Estimate, Metric};
use crate::round_hundredths;

/// Average taxiing speed in meters per minute (15 km/h)
pub const AVG_TAXI_SPEED: f64 = 250.0;

/// Taxi time in minutes for a path length in meters
pub fn travel_time(raw_distance: f64) -> f64 {
    round_hundredths(raw_distance / AVG_TAXI_SPEED)
}

/// Combines the shortest path length with the predicted delay.
///
/// `raw_distance` is `None` when no path exists. The delay is only requested
/// for a found path; without one every figure is undefined. The total adds
/// the unrounded delay to the travel time. An unavailable or non-finite delay
/// leaves the total undefined as well.
pub fn compose<F>(raw_distance: Option<f64>, delay: F) -> Estimate
where
    F: FnOnce() -> Metric,
{
    let Some(raw_distance) = raw_distance else {
        return Estimate {
            raw_distance: Metric::NoPath,
            travel_time: Metric::NoPath,
            predicted_delay: Metric::Unavailable,
            total_estimate: Metric::Unavailable,
        };
    };

    let travel_time = travel_time(raw_distance);
    let (predicted_delay, total_estimate) = match delay() {
        Metric::Value(delay) if delay.is_finite() => (
            Metric::Value(round_hundredths(delay)),
            Metric::Value(round_hundredths(travel_time + delay)),
        ),
        Metric::Value(_) | Metric::NoPath | Metric::Unavailable => {
            (Metric::Unavailable, Metric::Unavailable)
        }
    };

    Estimate {
        raw_distance: Metric::Value(round_hundredths(raw_distance)),
        travel_time: Metric::Value(travel_time),
        predicted_delay,
        total_estimate,
    }
}
