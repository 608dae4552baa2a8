use axum::{
    routing::{get, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_security_headers_layer, Config};
use crate::handlers::events::{create_event, delete_event, list_events, toggle_archive};
use crate::handlers::{health_check, root};
use crate::state::AppState;

pub fn create_routes(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/events", get(list_events).post(create_event))
        .route("/events/:id", put(toggle_archive).delete(delete_event))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(create_security_headers_layer(config))
        .layer(create_cors_layer(config))
}
