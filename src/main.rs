//! Command line front-end for taxi time estimation

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use model::DataArgs;
use routing::{EstimateArgs, estimate, list_nodes};

mod model;
mod routing;

/// Log filter used when `RUST_LOG` is not set
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Estimate taxi time between two nodes and print it as JSON
    Estimate(EstimateArgs),
    /// Print every node id with its readable label
    Nodes(DataArgs),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();
    let outcome = match &cli.command {
        Command::Estimate(args) => estimate(args),
        Command::Nodes(args) => list_nodes(args),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[test]
    fn test_default_filter_is_info() {
        assert_eq!(
            EnvFilter::new(DEFAULT_LOG_FILTER).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }
}
