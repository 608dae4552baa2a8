#![allow(dead_code)]

use axum::Router;
use schedulai_server::config::Config;
use schedulai_server::routes::create_routes;
use schedulai_server::state::AppState;
use schedulai_server::store::EventStore;
use tokio::net::TcpListener;

pub fn app() -> Router {
    app_with(EventStore::new())
}

pub fn app_with(store: EventStore) -> Router {
    create_routes(AppState::new(store), &Config::default())
}

/// Serves the router on an ephemeral port and returns its base URL.
pub async fn spawn_server(store: EventStore) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = app_with(store);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}
