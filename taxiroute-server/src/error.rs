use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to read config '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("Failed to create airport model: {0}")]
    Model(#[from] taxiroute_core::Error),
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}
