//! Todo list HTTP server.
//!
//! In-memory todo list with an htmx front end and a JSON rendition.

use todo_core::TodoEnvironment;
use todo_runtime::MetricsRecorder;
use todo_web::{AppState, Config, TodoService, build_router};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEMO_TODOS: [&str; 3] = ["Buy milk", "Clean house", "Water the plants"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is not an error
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Todo HTTP Server");
    info!(
        host = %config.host,
        port = config.port,
        seed = config.seed,
        metrics = config.metrics,
        "Configuration loaded"
    );

    let mut recorder = MetricsRecorder::new();
    if config.metrics {
        match recorder.install() {
            Ok(()) if recorder.is_installed() => info!("Prometheus recorder installed"),
            Ok(()) => warn!("A metrics recorder was already installed; /metrics disabled"),
            Err(e) => warn!(error = %e, "Metrics disabled"),
        }
    }

    let todos = TodoService::in_memory(TodoEnvironment::system());
    if config.seed {
        let seeded = todos.seed(DEMO_TODOS).await;
        info!(count = seeded, "Seeded demo todos");
    }

    let app = build_router(AppState::new(todos, recorder));

    let addr = config.bind_address();
    info!(address = %addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM.
///
/// A signal handler that fails to install never resolves, so the other one
/// still gets a chance.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
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
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C signal, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received SIGTERM signal, shutting down gracefully...");
        },
    }
}
