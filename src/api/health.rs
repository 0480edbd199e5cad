//! Liveness and readiness probes
//!
//! Liveness is unconditional. Readiness runs the store reachability probe
//! under a fixed timeout and reports the check outcome with its elapsed
//! time, so operational tooling can tell "process up" from "store
//! reachable".

use std::time::Duration;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::domain::HealthReport;
use crate::infrastructure::AppState;

const READY_TIMEOUT: Duration = Duration::from_secs(3);

#[utoipa::path(
    get,
    path = "/api/health/live",
    responses(
        (status = 200, description = "Service is running")
    )
)]
pub async fn live() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "catalog",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[utoipa::path(
    get,
    path = "/api/health/ready",
    responses(
        (status = 200, description = "Backing store is reachable"),
        (status = 503, description = "Backing store is unreachable")
    )
)]
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let report = match tokio::time::timeout(READY_TIMEOUT, state.store_health.ping()).await {
        Ok(report) => report,
        Err(_) => HealthReport {
            healthy: false,
            message: Some(format!("ping timed out after {:?}", READY_TIMEOUT)),
            duration: READY_TIMEOUT,
        },
    };

    let status = if report.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = json!({
        "status": if report.healthy { "Healthy" } else { "Unhealthy" },
        "checks": [{
            "name": "store",
            "status": if report.healthy { "Healthy" } else { "Unhealthy" },
            "message": report.message,
            "duration_ms": report.duration.as_millis() as u64
        }]
    });

    (status, Json(body))
}
