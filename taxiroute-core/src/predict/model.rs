use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::Error;

/// Trained delay model.
///
/// Features are `[time_of_day, traffic_level, encoded_weather]`, the output
/// is the expected delay in minutes. Any `Fn([f64; 3]) -> f64` closure is a
/// model as well, which makes it easy to inject a fixed predictor.
pub trait DelayModel: Send + Sync {
    fn predict(&self, features: [f64; 3]) -> f64;
}

impl<F> DelayModel for F
where
    F: Fn([f64; 3]) -> f64 + Send + Sync,
{
    fn predict(&self, features: [f64; 3]) -> f64 {
        self(features)
    }
}

/// Linear regression exported as JSON:
/// `{"intercept": 1.5, "coefficients": [0.1, 0.8, 2.0]}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinearDelayModel {
    pub intercept: f64,
    pub coefficients: [f64; 3],
}

impl LinearDelayModel {
    pub fn new(intercept: f64, coefficients: [f64; 3]) -> Self {
        Self {
            intercept,
            coefficients,
        }
    }

    /// Reads a model artifact
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is not a valid model
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let file = File::open(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to open delay model '{}': {}", path.display(), e),
            )
        })?;
        let model: Self = serde_json::from_reader(BufReader::new(file))?;
        if !model.intercept.is_finite() || model.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(Error::InvalidData(format!(
                "Delay model '{}' contains non-finite parameters",
                path.display()
            )));
        }
        Ok(model)
    }
}

impl DelayModel for LinearDelayModel {
    fn predict(&self, features: [f64; 3]) -> f64 {
        self.coefficients
            .iter()
            .zip(features)
            .fold(self.intercept, |acc, (coef, x)| acc + coef * x)
    }
}
