//! Error handling.

use axum::{
    extract::rejection::JsonRejection,
    http::header,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ndarray::ShapeError;
use serde::{Deserialize, Serialize};
use std::error::Error;
use thiserror::Error;
use tracing::{event, Level};

/// Correlation server error type
///
/// This type encapsulates the various errors that may occur.
/// Each variant may result in a different API error response.
#[derive(Debug, Error)]
pub enum CorrelationError {
    /// One or both dataset arrays are empty
    #[error("Arrays cannot be empty")]
    EmptyInput,

    /// Dataset arrays have different lengths
    #[error("Arrays must have equal length")]
    LengthMismatch,

    /// Array X contains a non-numeric element
    #[error("Array X must contain only numeric values")]
    NonNumericX,

    /// Array Y contains a non-numeric element
    #[error("Array Y must contain only numeric values")]
    NonNumericY,

    /// Dataset arrays are too short for a variance-based statistic
    #[error("Arrays must contain at least 2 elements")]
    InsufficientData,

    /// A constant-valued array makes the correlation undefined
    #[error("Cannot calculate {operation} coefficient (constant values)")]
    DegenerateInput { operation: &'static str },

    /// Error deserialising the request body into RequestData
    #[error("request data is not valid")]
    RequestDataJsonRejection(#[from] JsonRejection),

    /// Error creating an ndarray from the dataset arrays
    #[error("failed to create array from shape")]
    ShapeInvalid(#[from] ShapeError),
}

impl IntoResponse for CorrelationError {
    /// Convert from a `CorrelationError` into an [axum::response::Response].
    fn into_response(self) -> Response {
        ErrorResponse::from(self).into_response()
    }
}

/// A response to send in error cases
///
/// The body serialises as `{"detail": "<message>"}`.
#[derive(Deserialize, Serialize)]
struct ErrorResponse {
    /// HTTP status of the response
    #[serde(skip)]
    status: StatusCode,

    /// Human-readable error message
    detail: String,
}

impl ErrorResponse {
    /// Return a new ErrorResponse
    ///
    /// # Arguments
    ///
    /// * `status`: HTTP status of the response
    /// * `error`: The error that occurred. Its source chain is folded into the detail message
    fn new<E>(status: StatusCode, error: &E) -> Self
    where
        E: std::error::Error + Send + Sync,
    {
        ErrorResponse {
            status,
            detail: error_detail(error),
        }
    }

    /// Return a 400 bad request ErrorResponse
    fn bad_request<E>(error: &E) -> Self
    where
        E: std::error::Error + Send + Sync,
    {
        Self::new(StatusCode::BAD_REQUEST, error)
    }

    /// Return a 500 internal server error ErrorResponse
    fn internal_server_error<E>(error: &E) -> Self
    where
        E: std::error::Error + Send + Sync,
    {
        let mut response = Self::new(StatusCode::INTERNAL_SERVER_ERROR, error);
        response.detail = format!("Internal server error: {}", response.detail);
        response
    }
}

/// Render an error and its source chain as a single detail message.
fn error_detail<E>(error: &E) -> String
where
    E: std::error::Error,
{
    let mut parts = vec![error.to_string()];
    let mut current = error.source();
    while let Some(source) = current {
        let text = source.to_string();
        // Remove duplicate entries.
        if parts.last() != Some(&text) {
            parts.push(text);
        }
        current = source.source();
    }
    parts.join(": ")
}

impl From<CorrelationError> for ErrorResponse {
    /// Convert from a `CorrelationError` into an `ErrorResponse`.
    fn from(error: CorrelationError) -> Self {
        let response = match &error {
            // Bad request
            CorrelationError::EmptyInput
            | CorrelationError::LengthMismatch
            | CorrelationError::NonNumericX
            | CorrelationError::NonNumericY
            | CorrelationError::InsufficientData
            | CorrelationError::DegenerateInput { operation: _ }
            | CorrelationError::RequestDataJsonRejection(_) => Self::bad_request(&error),

            // Internal server error
            CorrelationError::ShapeInvalid(_) => Self::internal_server_error(&error),
        };

        // Log server errors.
        if response.status.is_server_error() {
            event!(Level::ERROR, "{}", error.to_string());
            let mut current = error.source();
            while let Some(source) = current {
                event!(Level::ERROR, "Caused by: {}", source.to_string());
                current = source.source();
            }
        }

        response
    }
}

impl IntoResponse for ErrorResponse {
    /// Convert from an `ErrorResponse` into an `axum::response::Response`.
    ///
    /// Renders the response as JSON.
    fn into_response(self) -> Response {
        let json_body = serde_json::to_string(&self);
        match json_body {
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to serialise error response: {}", err),
            )
                .into_response(),
            Ok(json_body) => (
                self.status,
                [(&header::CONTENT_TYPE, mime::APPLICATION_JSON.to_string())],
                json_body,
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use hyper::HeaderMap;

    // Jump through the hoops to get the body as a string.
    async fn body_string(response: Response) -> String {
        String::from_utf8(
            hyper::body::to_bytes(response.into_body())
                .await
                .unwrap()
                .to_vec(),
        )
        .unwrap()
    }

    async fn test_correlation_error(error: CorrelationError, status: StatusCode, detail: &str) {
        let response = error.into_response();
        assert_eq!(status, response.status());
        let mut headers = HeaderMap::new();
        headers.insert(&header::CONTENT_TYPE, "application/json".parse().unwrap());
        assert_eq!(headers, *response.headers());
        let error_response: ErrorResponse =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(detail.to_string(), error_response.detail);
    }

    #[tokio::test]
    async fn empty_input_error() {
        let error = CorrelationError::EmptyInput;
        let detail = "Arrays cannot be empty";
        test_correlation_error(error, StatusCode::BAD_REQUEST, detail).await;
    }

    #[tokio::test]
    async fn length_mismatch_error() {
        let error = CorrelationError::LengthMismatch;
        let detail = "Arrays must have equal length";
        test_correlation_error(error, StatusCode::BAD_REQUEST, detail).await;
    }

    #[tokio::test]
    async fn non_numeric_x_error() {
        let error = CorrelationError::NonNumericX;
        let detail = "Array X must contain only numeric values";
        test_correlation_error(error, StatusCode::BAD_REQUEST, detail).await;
    }

    #[tokio::test]
    async fn non_numeric_y_error() {
        let error = CorrelationError::NonNumericY;
        let detail = "Array Y must contain only numeric values";
        test_correlation_error(error, StatusCode::BAD_REQUEST, detail).await;
    }

    #[tokio::test]
    async fn insufficient_data_error() {
        let error = CorrelationError::InsufficientData;
        let detail = "Arrays must contain at least 2 elements";
        test_correlation_error(error, StatusCode::BAD_REQUEST, detail).await;
    }

    #[tokio::test]
    async fn degenerate_input_error() {
        let error = CorrelationError::DegenerateInput {
            operation: "Pearson",
        };
        let detail = "Cannot calculate Pearson coefficient (constant values)";
        test_correlation_error(error, StatusCode::BAD_REQUEST, detail).await;
    }

    #[tokio::test]
    async fn shape_invalid_error() {
        let error = CorrelationError::ShapeInvalid(ShapeError::from_kind(
            ndarray::ErrorKind::IncompatibleShape,
        ));
        let detail = "Internal server error: failed to create array from shape: \
                      ShapeError/IncompatibleShape: incompatible shapes";
        test_correlation_error(error, StatusCode::INTERNAL_SERVER_ERROR, detail).await;
    }
}
