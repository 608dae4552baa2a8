use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::utils::response::success;

pub mod events;

pub const ROOT_MESSAGE: &str = "SchedulAI Backend is running!";

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

/// GET / - plain-text liveness message
pub async fn root() -> &'static str {
    ROOT_MESSAGE
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "schedulai-api",
    };

    success(payload, "Health check successful").into_response()
}
