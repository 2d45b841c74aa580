//! Application state shared across all handlers.

use std::sync::Arc;

use taskboard_auth::jwt::decoder::JwtDecoder;
use taskboard_core::config::AppConfig;
use taskboard_database::repositories::notification::NotificationRepository;
use taskboard_database::DatabasePool;
use taskboard_realtime::RealtimeEngine;
use taskboard_service::NotificationService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db: DatabasePool,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Notification repository.
    pub notification_repo: Arc<NotificationRepository>,
    /// Notification service.
    pub notification_service: Arc<NotificationService>,
    /// Real-time delivery engine.
    pub realtime: Arc<RealtimeEngine>,
}
