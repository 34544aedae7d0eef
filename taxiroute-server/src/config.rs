use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};
use taxiroute_core::AirportModelConfig;

use crate::error::ServerError;

/// Taxi time estimation server
#[derive(Debug, Default, Parser)]
#[command(version, about)]
pub struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Address to listen on
    #[arg(short, long)]
    pub bind: Option<SocketAddr>,
    /// Edges CSV (u,v,length)
    #[arg(long)]
    pub edges: Option<PathBuf>,
    /// Node labels CSV (osmid,readable_label)
    #[arg(long)]
    pub labels: Option<PathBuf>,
    /// Delay model artifact
    #[arg(long)]
    pub model: Option<PathBuf>,
    /// Weather encoder artifact
    #[arg(long)]
    pub encoder: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub request_timeout_secs: u64,
    pub concurrency_limit: usize,
    pub data: AirportModelConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            request_timeout_secs: 10,
            concurrency_limit: 256,
            data: AirportModelConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_toml(content: &str) -> Result<Self, ServerError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ServerError> {
        let content = std::fs::read_to_string(path).map_err(|e| ServerError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Configuration file (if any) with command line flags applied on top
    pub fn resolve(args: &Args) -> Result<Self, ServerError> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_args(args);
        Ok(config)
    }

    fn apply_args(&mut self, args: &Args) {
        if let Some(bind) = args.bind {
            self.bind = bind;
        }
        if let Some(edges) = &args.edges {
            self.data.edges_path.clone_from(edges);
        }
        if let Some(labels) = &args.labels {
            self.data.labels_path = Some(labels.clone());
        }
        if let Some(model) = &args.model {
            self.data.model_path = Some(model.clone());
        }
        if let Some(encoder) = &args.encoder {
            self.data.encoder_path = Some(encoder.clone());
        }
    }
}
