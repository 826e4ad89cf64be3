//! Exam-client reports. Both endpoints only log what they receive.

use crate::error::ServerResult;
use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

/// A proctoring violation raised by the exam client.
#[derive(Debug, Deserialize)]
pub struct ViolationReport {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub details: Option<Value>,
    #[serde(default)]
    pub timestamp: Option<Value>,
}

/// One telemetry sample from the exam client.
#[derive(Debug, Deserialize)]
pub struct TelemetryReport {
    #[serde(default)]
    pub gaze: Option<String>,
    #[serde(default)]
    pub objects: Vec<String>,
    #[serde(default)]
    pub timestamp: Option<Value>,
}

fn render(value: &Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "-".to_string(),
    }
}

pub async fn report_violation(
    payload: Result<Json<ViolationReport>, JsonRejection>,
) -> ServerResult<impl IntoResponse> {
    let Json(report) = payload?;
    let kind = report.kind.as_deref().unwrap_or("unknown");

    ::metrics::counter!("codefp_violations_total", "type" => kind.to_string()).increment(1);
    tracing::warn!(
        kind,
        details = %render(&report.details),
        timestamp = %render(&report.timestamp),
        "proctoring violation"
    );

    Ok(Json(json!({ "status": "logged" })))
}

pub async fn report_telemetry(
    payload: Result<Json<TelemetryReport>, JsonRejection>,
) -> ServerResult<impl IntoResponse> {
    let Json(report) = payload?;
    let objects = if report.objects.is_empty() {
        "None".to_string()
    } else {
        report.objects.join(", ")
    };

    tracing::info!(
        gaze = report.gaze.as_deref().unwrap_or("-"),
        objects = %objects,
        timestamp = %render(&report.timestamp),
        "proctoring telemetry"
    );

    Ok(Json(json!({ "status": "ok" })))
}
