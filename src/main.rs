//! This file defines the correlator binary entry point.

use correlator::app;
use correlator::cli;
use correlator::metrics;
use correlator::server;
use correlator::tracing;

/// Application entry point
#[tokio::main]
async fn main() {
    let args = cli::parse();
    tracing::init_tracing();
    metrics::register_metrics();
    let router = app::router();
    server::serve(&args, router).await;
}
