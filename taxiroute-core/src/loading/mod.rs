//! This module is responsible for loading the taxiway network and delay
//! model artifacts and building the estimation context.

mod builder;
mod config;
pub mod tables;

pub use builder::create_airport_model;
pub use config::AirportModelConfig;
