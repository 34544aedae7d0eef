use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Locations of the input data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirportModelConfig {
    /// Edges CSV with `u,v,length` columns
    pub edges_path: PathBuf,
    /// Labels CSV with `osmid,readable_label` columns
    pub labels_path: Option<PathBuf>,
    /// Delay model artifact (JSON)
    pub model_path: Option<PathBuf>,
    /// Weather encoder artifact (JSON)
    pub encoder_path: Option<PathBuf>,
}

impl Default for AirportModelConfig {
    fn default() -> Self {
        Self {
            edges_path: PathBuf::from("data/airport_edges.csv"),
            labels_path: Some(PathBuf::from("data/node_labels.csv")),
            model_path: Some(PathBuf::from("models/delay_model.json")),
            encoder_path: Some(PathBuf::from("models/weather_encoder.json")),
        }
    }
}
