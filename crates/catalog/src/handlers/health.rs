//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Reports the storage and cache backends in use, and
//!   `degraded` when a configured cache could not be reached

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::state::{AppState, Backends};

/// Body of `/healthz`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    #[serde(flatten)]
    pub backends: Backends,
}

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Backend information.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Json<HealthReport> {
    let status = if state.backends.cache_degraded {
        "degraded"
    } else {
        "ok"
    };

    Json(HealthReport {
        status,
        backends: state.backends,
    })
}
