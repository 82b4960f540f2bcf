//! Prometheus metrics.

use axum::{body::Body, http::Request, response::Response};
use lazy_static::lazy_static;
use prometheus::{self, Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry};
use tracing::Span;

lazy_static! {
    // Registry for holding metric state
    pub static ref REGISTRY: Registry = Registry::new();
    // Request counter by HTTP method and endpoint path
    pub static ref HTTP_REQUESTS: IntCounterVec = IntCounterVec::new(
        Opts::new("correlator_http_requests", "The number of HTTP requests received"),
        &["http_method", "path"]
    ).unwrap();
    // Response counter by status code
    pub static ref HTTP_RESPONSES: IntCounterVec = IntCounterVec::new(
        Opts::new("correlator_http_responses", "The number of HTTP responses sent"),
        &["status_code"]
    ).unwrap();
    // Response time histogram
    pub static ref RESPONSE_TIME: HistogramVec = HistogramVec::new(
        HistogramOpts{
            common_opts: Opts::new(
                "correlator_response_time_seconds",
                "The time taken to respond to each request",
            ),
            buckets: prometheus::DEFAULT_BUCKETS.to_vec(),
        },
        &[],
    ).unwrap();
}

/// Register all collectors with the registry. Called once at startup.
pub fn register_metrics() {
    REGISTRY.register(Box::new(HTTP_REQUESTS.clone())).unwrap();
    REGISTRY.register(Box::new(HTTP_RESPONSES.clone())).unwrap();
    REGISTRY.register(Box::new(RESPONSE_TIME.clone())).unwrap();
}

/// Render the registry contents in the Prometheus text exposition format.
pub async fn metrics_handler() -> String {
    let encoder = prometheus::TextEncoder::new();
    let mut buffer = Vec::new();

    encoder.encode(&REGISTRY.gather(), &mut buffer).unwrap();

    String::from_utf8(buffer).unwrap()
}

/// Increment the request counter on all incoming requests, labelled by method and path
pub fn request_counter(request: &Request<Body>, _span: &Span) {
    HTTP_REQUESTS
        .with_label_values(&[request.method().as_str(), request.uri().path()])
        .inc();
}

/// Increment the response counter and latency histogram on all outgoing responses
pub fn record_response_metrics<B>(
    response: &Response<B>,
    latency: std::time::Duration,
    _span: &Span,
) {
    HTTP_RESPONSES
        .with_label_values(&[response.status().as_str()])
        .inc();

    RESPONSE_TIME
        .with_label_values(&[])
        .observe(latency.as_secs_f64());
}
