use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use roster_backend::api::build_router;
use roster_backend::app_state::AppState;
use roster_backend::config::Config;
use roster_backend::db::pool::get_graph_pool;
use roster_backend::db::store::{Neo4jStore, SharedStore};
use roster_backend::graphql::graph_schema::create_schema;
use roster_backend::utils::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Arc::new(Config::from_env()?);
    let _log_guard = init_tracing(config.log_dir.as_deref())?;

    let graph = get_graph_pool(&config).await?;
    let store: SharedStore = Arc::new(Neo4jStore::new(graph));

    let schema = create_schema(store.clone(), &config);
    let app = build_router(AppState::new(store, config.clone()), schema)?;

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("Server running at http://{}/graphql", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
        _ = terminate => info!("Received SIGTERM, shutting down..."),
    }
}
