//! Prometheus wiring.
//!
//! The recorder is process-global; install it once from `start_server`.

use std::sync::Arc;
use std::time::Duration;

use matcher::{set_match_metrics, MatchMetrics};
use ::metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::error::{ServerError, ServerResult};

/// Forwards matcher observations to the `metrics` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrometheusMatchMetrics;

impl MatchMetrics for PrometheusMatchMetrics {
    fn record_match(&self, latency: Duration, corpus_size: usize, flagged: bool) {
        histogram!("codefp_match_latency_seconds").record(latency.as_secs_f64());
        counter!("codefp_matches_total", "flagged" => flagged.to_string()).increment(1);
        gauge!("codefp_corpus_entries").set(corpus_size as f64);
    }
}

/// Install the Prometheus recorder and route matcher metrics into it.
pub fn install_recorder() -> ServerResult<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|err| ServerError::Config(format!("failed to install metrics recorder: {err}")))?;
    set_match_metrics(Some(Arc::new(PrometheusMatchMetrics)));
    Ok(handle)
}

/// Count one HTTP request.
pub fn record_request(method: &str, status: u16, latency: Duration) {
    counter!(
        "codefp_http_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("codefp_http_request_duration_seconds").record(latency.as_secs_f64());
}
