use std::fmt;
use std::path::Path;

use log::{info, warn};

use super::encoder::WeatherEncoder;
use super::model::{DelayModel, LinearDelayModel};
use crate::Error;

/// Delay prediction capability.
///
/// `Unavailable` is a regular state, not an error: every prediction then
/// yields a delay of zero minutes.
pub enum DelayPredictor {
    Available {
        model: Box<dyn DelayModel>,
        encoder: WeatherEncoder,
    },
    Unavailable,
}

impl DelayPredictor {
    pub fn available(model: impl DelayModel + 'static, encoder: WeatherEncoder) -> Self {
        Self::Available {
            model: Box::new(model),
            encoder,
        }
    }

    /// Loads the model and encoder artifacts.
    ///
    /// A path that is not configured or does not exist leaves the predictor
    /// unavailable.
    ///
    /// # Errors
    ///
    /// Returns an error if both artifacts exist but one of them cannot be read
    pub fn load(model_path: Option<&Path>, encoder_path: Option<&Path>) -> Result<Self, Error> {
        let (Some(model_path), Some(encoder_path)) = (model_path, encoder_path) else {
            warn!("Delay model not configured - predicted delay defaults to 0");
            return Ok(Self::Unavailable);
        };

        if !model_path.exists() || !encoder_path.exists() {
            warn!(
                "Delay model not found at {} or {} - predicted delay defaults to 0",
                model_path.display(),
                encoder_path.display()
            );
            return Ok(Self::Unavailable);
        }

        let model = LinearDelayModel::from_path(model_path)?;
        let encoder = WeatherEncoder::from_path(encoder_path)?;
        info!(
            "Loaded delay model with {} weather categories",
            encoder.classes().len()
        );

        Ok(Self::available(model, encoder))
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }

    /// Predicted delay in minutes for the given conditions
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnseenCategory`] if the weather is unknown to the encoder
    pub fn predict(
        &self,
        time_of_day: i64,
        traffic_level: i64,
        weather: &str,
    ) -> Result<f64, Error> {
        match self {
            Self::Available { model, encoder } => {
                let weather = encoder.transform(weather)?;
                #[allow(clippy::cast_precision_loss)]
                let features = [time_of_day as f64, traffic_level as f64, weather];
                Ok(model.predict(features))
            }
            Self::Unavailable => Ok(0.0),
        }
    }
}

impl fmt::Debug for DelayPredictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available { encoder, .. } => f
                .debug_struct("Available")
                .field("encoder", encoder)
                .finish_non_exhaustive(),
            Self::Unavailable => f.write_str("Unavailable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_predicts_zero() {
        let predictor = DelayPredictor::Unavailable;
        assert!(!predictor.is_available());
        for (time, traffic, weather) in [(0, 0, "clear"), (23, 9, "unknown"), (-4, 100, "")] {
            assert_eq!(predictor.predict(time, traffic, weather).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_available_uses_encoded_weather() {
        let predictor = DelayPredictor::available(
            LinearDelayModel::new(0.0, [0.0, 0.0, 1.5]),
            WeatherEncoder::new(["clear", "fog", "rain"]),
        );
        assert!(predictor.is_available());
        assert_eq!(predictor.predict(8, 2, "rain").unwrap(), 3.0);
    }

    #[test]
    fn test_unseen_weather_fails() {
        let predictor =
            DelayPredictor::available(|_: [f64; 3]| 1.0, WeatherEncoder::new(["clear"]));
        assert!(matches!(
            predictor.predict(8, 2, "sandstorm"),
            Err(Error::UnseenCategory(_))
        ));
    }

    #[test]
    fn test_missing_artifacts_leave_predictor_unavailable() {
        let missing = Path::new("does/not/exist.json");
        assert!(!DelayPredictor::load(Some(missing), Some(missing)).unwrap().is_available());
        assert!(!DelayPredictor::load(None, Some(missing)).unwrap().is_available());
        assert!(!DelayPredictor::load(None, None).unwrap().is_available());
    }
}
