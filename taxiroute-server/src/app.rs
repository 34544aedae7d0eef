use std::sync::Arc;
use std::time::Duration;

use axum::{
    BoxError, Form, Json, Router,
    error_handling::HandleErrorLayer,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use taxiroute_core::{AirportModel, RouteForm, RouteRequest, estimate_route};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::view::{NetworkView, PageView};

/// Shared, read-only state of every request
#[derive(Clone)]
pub struct AppState {
    model: Arc<AirportModel>,
    network: Arc<NetworkView>,
}

impl AppState {
    pub fn new(model: AirportModel) -> Self {
        let network = NetworkView::new(&model.graph);
        Self {
            model: Arc::new(model),
            network: Arc::new(network),
        }
    }
}

pub fn router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(index).post(submit))
        .route("/health", get(health))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(Duration::from_secs(config.request_timeout_secs))
                .concurrency_limit(config.concurrency_limit),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn index(State(state): State<AppState>) -> Response {
    Json(PageView {
        network: &state.network,
        result: None,
        error: None,
    })
    .into_response()
}

async fn submit(State(state): State<AppState>, Form(form): Form<RouteForm>) -> Response {
    let request = match RouteRequest::parse(&form) {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejected route form: {e}");
            return (
                StatusCode::BAD_REQUEST,
                Json(PageView {
                    network: &state.network,
                    result: None,
                    error: Some("Invalid Input"),
                }),
            )
                .into_response();
        }
    };

    let result = estimate_route(&state.model, &request);
    info!(
        start = request.start,
        end = request.end,
        total_estimate = %result.estimate.total_estimate,
        "Route estimated"
    );

    Json(PageView {
        network: &state.network,
        result: Some(result),
        error: None,
    })
    .into_response()
}

async fn health() -> &'static str {
    "ok"
}

async fn handle_middleware_error(err: BoxError) -> (StatusCode, String) {
    if err.is::<tower::timeout::error::Elapsed>() {
        (StatusCode::REQUEST_TIMEOUT, "Request timed out".to_string())
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Unhandled internal error: {err}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use serde_json::{Value, json};
    use taxiroute_core::{DelayPredictor, TaxiwayGraph, WeatherEncoder};
    use tower::ServiceExt;

    use super::*;

    fn app(predictor: DelayPredictor) -> Router {
        let mut graph = TaxiwayGraph::new();
        graph.add_edge(1, 2, 500.0).unwrap();
        graph.add_edge(3, 2, 100.0).unwrap();
        graph.set_label(1, "Gate 12");
        let state = AppState::new(AirportModel::new(graph, predictor));
        router(state, &ServerConfig::default())
    }

    async fn post_form(app: Router, body: &'static str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::post("/")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_index_lists_network() {
        let response = app(DelayPredictor::Unavailable)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let page: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            page["nodes"],
            json!([
                {"id": 1, "label": "Gate 12"},
                {"id": 2, "label": "2"},
                {"id": 3, "label": "3"},
            ])
        );
        assert_eq!(page["edges"][0], json!({"from": 1, "to": 2, "label": "500.0"}));
        assert_eq!(page["result"], Value::Null);
        assert_eq!(page["error"], Value::Null);
    }

    #[tokio::test]
    async fn test_submit_found_path() {
        let (status, page) = post_form(
            app(DelayPredictor::Unavailable),
            "start=1&end=2&time_of_day=8&traffic_level=2&weather=clear",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            page["result"],
            json!({
                "path": [1, 2],
                "readable_path": ["Gate 12", "2"],
                "raw_distance": 500.0,
                "travel_time": 2.0,
                "predicted_delay": 0.0,
                "total_estimate": 2.0,
            })
        );
    }

    #[tokio::test]
    async fn test_submit_no_path() {
        let (status, page) = post_form(
            app(DelayPredictor::Unavailable),
            "start=1&end=3&time_of_day=8&traffic_level=2&weather=clear",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["result"]["path"], json!([]));
        assert_eq!(page["result"]["raw_distance"], "No Path");
        assert_eq!(page["result"]["travel_time"], "No Path");
        assert_eq!(page["result"]["predicted_delay"], "N/A");
        assert_eq!(page["result"]["total_estimate"], "N/A");
    }

    #[tokio::test]
    async fn test_submit_unseen_weather() {
        let predictor =
            DelayPredictor::available(|_: [f64; 3]| 3.0, WeatherEncoder::new(["clear"]));
        let (status, page) = post_form(
            app(predictor),
            "start=1&end=2&time_of_day=8&traffic_level=2&weather=tornado",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["result"]["travel_time"], 2.0);
        assert_eq!(page["result"]["predicted_delay"], "N/A");
        assert_eq!(page["result"]["total_estimate"], "N/A");
    }

    #[tokio::test]
    async fn test_submit_invalid_input() {
        let (status, page) = post_form(
            app(DelayPredictor::Unavailable),
            "start=abc&end=2&time_of_day=8&traffic_level=2&weather=clear",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(page["error"], "Invalid Input");
        assert_eq!(page["result"], Value::Null);
        assert_eq!(page["nodes"].as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(DelayPredictor::Unavailable)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
