//! HTTP front-end for taxi time estimation.
//!
//! `GET /` lists the taxiway network, `POST /` takes the route form
//! (`start`, `end`, `time_of_day`, `traffic_level`, `weather`) and answers
//! with the estimate.

mod app;
mod config;
mod error;
mod view;

use std::process::ExitCode;

use clap::Parser;
use taxiroute_core::create_airport_model;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::app::{AppState, router};
use crate::config::{Args, ServerConfig};
use crate::error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let args = Args::parse();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<(), ServerError> {
    let config = ServerConfig::resolve(args)?;

    let data = config.data.clone();
    let model = tokio::task::spawn_blocking(move || create_airport_model(&data))
        .await
        .map_err(std::io::Error::other)??;

    let app = router(AppState::new(model), &config);
    let listener = TcpListener::bind(config.bind).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
    }
    info!("Shutdown signal received");
}
