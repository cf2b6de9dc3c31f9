//! Metrics collection and exposition.
//!
//! # Metrics
//! - `edge_filter_decisions_total` (counter): filter outcomes by `outcome`, `reason`
//! - `edge_handler_responses_total` (counter): static handler responses by `handler`, `status`

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and serve it on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_decision(outcome: &'static str, reason: &'static str) {
    metrics::counter!("edge_filter_decisions_total", "outcome" => outcome, "reason" => reason)
        .increment(1);
}

pub fn record_handler(handler: &'static str, status: u16) {
    metrics::counter!(
        "edge_handler_responses_total",
        "handler" => handler,
        "status" => status.to_string()
    )
    .increment(1);
}
