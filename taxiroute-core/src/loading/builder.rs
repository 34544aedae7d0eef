use log::info;

use super::config::AirportModelConfig;
use super::tables::load_graph;
use crate::{AirportModel, DelayPredictor, Error};

/// Creates the estimation context based on the provided configuration
///
/// # Errors
///
/// Returns an error if there are problems reading or processing data
pub fn create_airport_model(config: &AirportModelConfig) -> Result<AirportModel, Error> {
    validate_config(config)?;

    info!("Loading taxiway network: {}", config.edges_path.display());
    let graph = load_graph(&config.edges_path, config.labels_path.as_deref())?;
    info!(
        "Loaded {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let predictor = DelayPredictor::load(
        config.model_path.as_deref(),
        config.encoder_path.as_deref(),
    )?;

    let model = AirportModel::new(graph, predictor);
    info!("Airport model created: {}", model.model_info());
    Ok(model)
}

fn validate_config(config: &AirportModelConfig) -> Result<(), Error> {
    if !config.edges_path.exists() {
        return Err(Error::InvalidData(format!(
            "Edges file not found: {}",
            config.edges_path.display()
        )));
    }

    if let Some(labels_path) = &config.labels_path {
        if !labels_path.exists() {
            return Err(Error::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Labels file not found: {}", labels_path.display()),
            )));
        }
    }

    Ok(())
}
