//! Event resource endpoints

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;

use crate::models::NewEvent;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{json, no_content};

/// GET /events - all events in chronological order
pub async fn list_events(State(state): State<AppState>) -> Result<Response, AppError> {
    let events = state.read()?.list();
    tracing::debug!(count = events.len(), "Listing events");
    Ok(json(StatusCode::OK, events))
}

/// POST /events
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<NewEvent>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(new_event) = payload?;
    let event = state.write()?.create(new_event)?;
    Ok(json(StatusCode::CREATED, event))
}

/// PUT /events/:id - flips the archived flag
pub async fn toggle_archive(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let event = state.write()?.toggle_archive(id)?;
    Ok(json(StatusCode::OK, event))
}

/// DELETE /events/:id
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    state.write()?.delete(id)?;
    Ok(no_content())
}

/// Reads the leading digits of the path segment, so `5abc` names event 5.
/// A segment without leading digits can never name an event.
fn parse_id(raw: &str) -> Result<u64, AppError> {
    let trimmed = raw.trim_start();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());

    trimmed[..digits_end]
        .parse::<u64>()
        .map_err(|_| AppError::NotFound("Event not found.".to_string()))
}
