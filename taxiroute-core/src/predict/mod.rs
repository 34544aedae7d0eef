//! Delay prediction from time of day, traffic level and weather

pub mod encoder;
pub mod model;
pub mod predictor;

pub use encoder::WeatherEncoder;
pub use model::{DelayModel, LinearDelayModel};
pub use predictor::DelayPredictor;
