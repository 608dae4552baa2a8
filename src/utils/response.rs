use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
    pub details: Option<Value>,
}

/// Error envelope. `message` sits at the top level so clients that only
/// read `{ message }` keep working.
#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub message: String,
    pub error: ApiErrorBody,
}

pub fn success<T>(data: T, message: impl Into<String>) -> impl IntoResponse
where
    T: Serialize,
{
    let body = ApiResponse {
        success: true,
        data: Some(data),
        message: Some(message.into()),
    };
    (StatusCode::OK, Json(body))
}

/// Bare JSON payload with an explicit status, used by the event resource.
pub fn json<T>(status: StatusCode, data: T) -> Response
where
    T: Serialize,
{
    (status, Json(data)).into_response()
}

pub fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

pub fn error(
    code: &str,
    message: impl Into<String>,
    details: Option<Value>,
    status: StatusCode,
) -> Response {
    let message = message.into();
    let body = ApiErrorResponse {
        success: false,
        message: message.clone(),
        error: ApiErrorBody {
            code: code.to_string(),
            message,
            details,
        },
    };

    (status, Json(body)).into_response()
}
