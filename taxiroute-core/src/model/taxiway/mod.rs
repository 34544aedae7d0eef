//! Directed taxiway network

pub mod components;
pub mod network;

pub use components::{TaxiwayEdge, TaxiwayNode};
pub use network::TaxiwayGraph;
