//! This crate provides a Correlation Coefficient API server. It computes the Pearson
//! product-moment and Spearman rank correlation coefficients of two numeric datasets supplied in
//! JSON request bodies, returning each coefficient rounded to 6 decimal digits together with a
//! percentage rendering.
//!
//! The server is built on top of a number of open source components.
//!
//! * [Tokio](tokio), the most popular asynchronous Rust runtime.
//! * [Axum](axum) web framework, built by the Tokio team on top of various popular components,
//!   including the [hyper] HTTP library.
//! * [Serde](serde) performs (de)serialisation of JSON request and response data.
//! * [ndarray] and [ndarray_stats] provide the numerical arrays and the Pearson correlation
//!   primitive used by both operations.

pub mod app;
pub mod cli;
pub mod error;
pub mod metrics;
pub mod models;
pub mod operation;
pub mod operations;
pub mod request_json;
pub mod server;
#[cfg(test)]
pub mod test_utils;
pub mod tracing;
pub mod types;
