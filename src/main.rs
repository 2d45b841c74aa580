//! TaskBoard notification server.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use taskboard_core::config::AppConfig;
use taskboard_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("TASKBOARD_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting TaskBoard v{}", env!("CARGO_PKG_VERSION"));

    // ── Database connection + migrations ─────────────────────────
    let db = taskboard_database::connection::DatabasePool::connect(&config.database).await?;
    taskboard_database::migration::run_migrations(db.pool()).await?;

    // ── Repositories and services ─────────────────────────────────
    let notification_repo = Arc::new(
        taskboard_database::repositories::notification::NotificationRepository::new(
            db.pool().clone(),
        ),
    );
    let notification_service = Arc::new(taskboard_service::NotificationService::new(Arc::clone(
        &notification_repo,
    )));

    // ── Auth ──────────────────────────────────────────────────────
    let jwt_decoder = Arc::new(taskboard_auth::jwt::decoder::JwtDecoder::new(&config.auth));

    // ── Real-time engine ──────────────────────────────────────────
    let realtime = Arc::new(
        taskboard_realtime::RealtimeEngine::new(
            &config.realtime,
            Arc::clone(&notification_service),
        )
        .await?,
    );

    // ── HTTP server ───────────────────────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app_state = taskboard_api::AppState {
        config: Arc::new(config),
        db: db.clone(),
        jwt_decoder,
        notification_repo,
        notification_service,
        realtime: Arc::clone(&realtime),
    };

    let app = taskboard_api::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("TaskBoard server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
            realtime.shutdown();
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    tracing::info!("TaskBoard server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
