use clap::Parser;
use scrolly_tree::{
    api::{AppState, create_router},
    config::Settings,
    db::{MemoryStore, load_seed_file, sample_seed},
    repositories::SessionRepository,
    services::{ForkService, LayoutService, SessionService},
};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

/// Conversation tree, fork and layout service
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Address to bind (overrides SERVER_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides SERVER_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// JSON seed for new sessions (overrides SEED_FILE)
    #[arg(long)]
    seed_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scrolly_tree=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let mut settings =
        Settings::from_env().map_err(|e| format!("Failed to load settings: {}", e))?;
    if let Some(host) = args.host {
        settings.server.host = host;
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    if let Some(path) = args.seed_file {
        settings.app.seed_file = Some(path);
    }

    tracing::info!("Starting scrolly-tree service");

    let default_seed = match &settings.app.seed_file {
        Some(path) => load_seed_file(path).map_err(|e| format!("Failed to load seed: {}", e))?,
        None => sample_seed(),
    };

    // Initialize repositories
    let store = MemoryStore::new();
    let session_repo = SessionRepository::new(store.clone());

    // Initialize services
    let session_service = Arc::new(SessionService::new(
        session_repo.clone(),
        settings.app.clone(),
        default_seed,
    ));
    let fork_service = Arc::new(ForkService::new(session_repo.clone(), settings.app.clone()));
    let layout_service = Arc::new(LayoutService::new(session_repo.clone(), settings.layout));

    let app_state = AppState {
        session_service,
        fork_service,
        layout_service,
    };

    let app = create_router(app_state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::new())
            .layer(CorsLayer::permissive()),
    );

    // Start server
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("API endpoints available at: http://{}/api/v1/", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    tracing::info!("Server shutdown complete, {} sessions dropped", store.len().await);

    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut terminate_signal = match signal(SignalKind::terminate()) {
            Ok(sig) => sig,
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {}", err);
                if let Err(err) = tokio::signal::ctrl_c().await {
                    tracing::error!("Failed to listen for Ctrl+C: {}", err);
                }
                return;
            }
        };

        tokio::select! {
            res = tokio::signal::ctrl_c() => {
                if let Err(err) = res {
                    tracing::error!("Failed to listen for Ctrl+C: {}", err);
                }
            },
            _ = terminate_signal.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", err);
        }
    }

    tracing::info!("Shutdown signal received, commencing graceful shutdown");
}
