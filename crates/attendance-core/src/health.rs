//! Liveness and readiness handlers.

use std::fmt::Display;

use axum::http::StatusCode;

/// `GET /healthz`: the process is up and serving.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Status for `GET /readyz` given the result of a dependency check such as a
/// database ping. Failures are logged and answered with 503.
pub fn readiness<E: Display>(check: Result<(), E>) -> StatusCode {
    if let Err(e) = check {
        ::tracing::warn!(error = %e, "not ready");
        return StatusCode::SERVICE_UNAVAILABLE;
    }
    StatusCode::OK
}
