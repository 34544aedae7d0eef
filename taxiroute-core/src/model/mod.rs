//! Data model for taxi time estimation
//!
//! Contains the taxiway network and the immutable context object shared by
//! all requests.

pub mod airport_model;
pub mod taxiway;

pub use airport_model::AirportModel;
pub use taxiway::network::TaxiwayGraph;
