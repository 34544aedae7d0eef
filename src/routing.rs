use clap::Args;
use taxiroute_core::prelude::*;

use crate::model::{DataArgs, load_model};

#[derive(Debug, Clone, Args)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub data: DataArgs,
    #[arg(long)]
    pub start: String,
    #[arg(long)]
    pub end: String,
    #[arg(long)]
    pub time_of_day: String,
    #[arg(long)]
    pub traffic_level: String,
    #[arg(long)]
    pub weather: String,
}

impl From<&EstimateArgs> for RouteForm {
    fn from(args: &EstimateArgs) -> Self {
        RouteForm {
            start: Some(args.start.clone()),
            end: Some(args.end.clone()),
            time_of_day: Some(args.time_of_day.clone()),
            traffic_level: Some(args.traffic_level.clone()),
            weather: Some(args.weather.clone()),
        }
    }
}

/// Validates the request before anything is loaded
pub fn estimate(args: &EstimateArgs) -> Result<(), Error> {
    let request = RouteRequest::parse(&RouteForm::from(args))?;
    let model = load_model(&args.data)?;
    let result = estimate_route(&model, &request);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

pub fn list_nodes(args: &DataArgs) -> Result<(), Error> {
    let model = load_model(args)?;
    for node in model.graph.nodes() {
        println!("{node}\t{}", model.graph.label(node));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        estimate: EstimateArgs,
    }

    #[test]
    fn test_estimate_args_become_form() {
        let harness = Harness::parse_from([
            "taxiroute",
            "--edges",
            "edges.csv",
            "--start",
            "1",
            "--end",
            "2",
            "--time-of-day",
            "8",
            "--traffic-level",
            "2",
            "--weather",
            "clear",
        ]);
        let request = RouteRequest::parse(&RouteForm::from(&harness.estimate)).unwrap();
        assert_eq!(request.start, 1);
        assert_eq!(request.weather, "clear");
        assert!(harness.estimate.data.model.is_none());
    }

    #[test]
    fn test_invalid_start_rejected_before_loading() {
        let harness = Harness::parse_from([
            "taxiroute",
            "--edges",
            "does/not/exist.csv",
            "--start",
            "abc",
            "--end",
            "2",
            "--time-of-day",
            "8",
            "--traffic-level",
            "2",
            "--weather",
            "clear",
        ]);
        assert!(matches!(
            estimate(&harness.estimate),
            Err(Error::InvalidInput(_))
        ));
    }
}
