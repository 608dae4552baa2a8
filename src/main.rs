use axum::Router;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use schedulai_server::config::Config;
use schedulai_server::routes::create_routes;
use schedulai_server::state::AppState;
use schedulai_server::store::EventStore;

const DEFAULT_LOG_FILTER: &str = "schedulai_server=info,tower_http=info";

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    let store = if config.seed_sample_events {
        EventStore::with_sample_events()
    } else {
        EventStore::new()
    };

    let app: Router = create_routes(AppState::new(store), &config);

    let addr = config.addr();
    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    tracing::info!("🚀 Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed");

    tracing::info!("Server stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
