//! HTTP API.

use crate::error::CorrelationError;
use crate::metrics;
use crate::models;
use crate::operation::Operation;
use crate::operations;
use crate::request_json::RequestJson;

use axum::{
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

impl IntoResponse for models::CorrelationResult {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

impl IntoResponse for models::BothResult {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Return the application [Router].
pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/pearson", post(pearson))
        .route("/spearman", post(spearman))
        .route("/both", post(both))
        .route("/metrics", get(metrics::metrics_handler))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .on_request(metrics::request_counter)
                        .on_response(metrics::record_response_metrics::<axum::body::BoxBody>),
                )
                // The browser front end is served from a different origin.
                .layer(CorsLayer::permissive()),
        )
}

/// API discovery payload.
async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Correlation Coefficient API",
        "endpoints": {
            "/pearson": "Calculate Pearson correlation coefficient",
            "/spearman": "Calculate Spearman rank correlation coefficient",
            "/both": "Calculate both correlation coefficients",
        }
    }))
}

/// Calculate the Pearson correlation coefficient of two dataset arrays.
async fn pearson(
    RequestJson(request_data): RequestJson<models::RequestData>,
) -> Result<models::CorrelationResult, CorrelationError> {
    operations::Pearson::execute(&request_data)
}

/// Calculate the Spearman rank correlation coefficient of two dataset arrays.
async fn spearman(
    RequestJson(request_data): RequestJson<models::RequestData>,
) -> Result<models::CorrelationResult, CorrelationError> {
    operations::Spearman::execute(&request_data)
}

/// Calculate both correlation coefficients of two dataset arrays.
async fn both(
    RequestJson(request_data): RequestJson<models::RequestData>,
) -> Result<models::BothResult, CorrelationError> {
    Ok(models::BothResult {
        pearson: operations::Pearson::execute(&request_data)?,
        spearman: operations::Spearman::execute(&request_data)?,
    })
}
