//! Axum extractor that deserialises JSON request bodies

use crate::error::CorrelationError;

use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Json},
    http::Request,
};
use serde::de::DeserializeOwned;

/// An axum extractor based on the Json extractor that maps rejections to the API's JSON error
/// responses, so a malformed body renders the same way as a validation failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestJson<T>(pub T);

#[async_trait]
impl<T, S, B> FromRequest<S, B> for RequestJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
    Json<T>: FromRequest<S, B, Rejection = JsonRejection>,
    B: Send + 'static,
{
    type Rejection = CorrelationError;

    /// Extract a `RequestJson` from a `Request`.
    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(RequestJson(value))
    }
}

#[cfg(test)]
mod tests {
    // https://github.com/tokio-rs/axum/blob/main/examples/testing/src/main.rs

    use super::*;
    use axum::{
        body::Body,
        http::{self, Request, StatusCode},
        response::Response,
        routing::post,
        Router,
    };
    use regex::Regex;
    use serde::Deserialize;
    use tower::ServiceExt; // for `oneshot` and `ready`

    #[derive(Deserialize)]
    struct TestPayload {
        pub foo: String,
        pub bar: Option<u32>,
    }

    // Handler function that accepts a RequestJson extractor.
    async fn test_handler(RequestJson(payload): RequestJson<TestPayload>) -> String {
        format!("foo: {} bar: {:?}", payload.foo, payload.bar)
    }

    // Build a router and make a oneshot request.
    async fn request(body: Body) -> Response {
        Router::new()
            .route("/", post(test_handler))
            .oneshot(
                Request::builder()
                    .method(http::Method::POST)
                    .uri("/")
                    .header(http::header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
                    .body(body)
                    .unwrap(),
            )
            .await
            .unwrap()
    }

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

    #[tokio::test]
    async fn ok() {
        let body = Body::from(r#"{"foo": "abc", "bar": 123}"#);
        let response = request(body).await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert_eq!(&body[..], "foo: abc bar: Some(123)");
    }

    #[tokio::test]
    async fn invalid_json() {
        let body = Body::from("{\"");
        let response = request(body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_string(response).await;
        let re = Regex::new(r"Failed to parse the request body as JSON").unwrap();
        assert!(re.is_match(&body[..]), "body: {body}")
    }

    #[tokio::test]
    async fn invalid_foo_type() {
        let body = Body::from(r#"{"foo": 123}"#);
        let response = request(body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_string(response).await;
        let re = Regex::new(r".*foo: invalid type: integer `123`.*").unwrap();
        assert!(re.is_match(&body[..]), "body: {body}")
    }
}
