//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use taskboard_core::config::auth::AuthConfig;
use taskboard_core::config::logging::LoggingConfig;
use taskboard_core::config::realtime::RealtimeConfig;
use taskboard_core::config::server::ServerConfig;
use taskboard_core::config::{AppConfig, DatabaseConfig};

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Real-time engine (memory bus) for driving domain events.
    pub realtime: Arc<taskboard_realtime::RealtimeEngine>,
    /// Token encoder sharing the app's secret.
    encoder: taskboard_auth::JwtEncoder,
}

impl TestApp {
    /// Creates a test application, or `None` when no test database is
    /// configured.
    pub async fn try_new() -> Option<Self> {
        let url = std::env::var("TASKBOARD_TEST_DATABASE_URL").ok()?;

        let config = AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url,
                max_connections: 5,
                min_connections: 1,
                connect_timeout_seconds: 10,
                idle_timeout_seconds: 300,
            },
            auth: AuthConfig {
                jwt_secret: "integration-test-secret".to_string(),
                jwt_access_ttl_minutes: 60,
            },
            realtime: RealtimeConfig::default(),
            logging: LoggingConfig::default(),
        };

        let db = taskboard_database::connection::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        taskboard_database::migration::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        // Tests scope every assertion to a fresh random user, so the
        // table is never truncated and tests can run in parallel.
        let notification_repo = Arc::new(
            taskboard_database::repositories::notification::NotificationRepository::new(
                db.pool().clone(),
            ),
        );
        let notification_service = Arc::new(taskboard_service::NotificationService::new(
            Arc::clone(&notification_repo),
        ));
        let jwt_decoder = Arc::new(taskboard_auth::JwtDecoder::new(&config.auth));
        let encoder = taskboard_auth::JwtEncoder::new(&config.auth);

        let realtime = Arc::new(
            taskboard_realtime::RealtimeEngine::new(
                &config.realtime,
                Arc::clone(&notification_service),
            )
            .await
            .expect("Failed to init realtime engine"),
        );

        let app_state = taskboard_api::AppState {
            config: Arc::new(config),
            db,
            jwt_decoder,
            notification_repo,
            notification_service,
            realtime: Arc::clone(&realtime),
        };

        let router = taskboard_api::build_router(app_state);

        Some(Self {
            router,
            realtime,
            encoder,
        })
    }

    /// Mints an access token for a synthetic user.
    pub fn token_for(&self, user_id: Uuid, username: &str) -> String {
        self.encoder
            .generate_access_token(user_id, username)
            .expect("Failed to mint token")
    }

    /// Makes an HTTP request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body.
    pub body: Value,
}
