use std::path::PathBuf;

use clap::Args;
use taxiroute_core::prelude::*;

/// Input data locations shared by all commands
#[derive(Debug, Clone, Args)]
pub struct DataArgs {
    /// Edges CSV (u,v,length)
    #[arg(long, default_value = "data/airport_edges.csv")]
    pub edges: PathBuf,
    /// Node labels CSV (osmid,readable_label)
    #[arg(long)]
    pub labels: Option<PathBuf>,
    /// Delay model artifact, without it the predicted delay is 0
    #[arg(long)]
    pub model: Option<PathBuf>,
    /// Weather encoder artifact
    #[arg(long)]
    pub encoder: Option<PathBuf>,
}

impl From<&DataArgs> for AirportModelConfig {
    fn from(args: &DataArgs) -> Self {
        AirportModelConfig {
            edges_path: args.edges.clone(),
            labels_path: args.labels.clone(),
            model_path: args.model.clone(),
            encoder_path: args.encoder.clone(),
        }
    }
}

pub fn load_model(args: &DataArgs) -> Result<AirportModel, Error> {
    create_airport_model(&AirportModelConfig::from(args))
}
