//! Integration tests for the WebSocket delivery channel endpoint and
//! health checks.

use http::StatusCode;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
async fn ws_upgrade_without_token_is_rejected() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let response = app.request("GET", "/ws", None, None).await;

    assert!(
        response.status == StatusCode::UNAUTHORIZED
            || response.status == StatusCode::BAD_REQUEST
            || response.status == StatusCode::UPGRADE_REQUIRED,
        "Expected 401, 400, or 426, got {}",
        response.status
    );
}

#[tokio::test]
async fn ws_upgrade_with_garbage_token_is_rejected() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let response = app.request("GET", "/ws?token=not-a-jwt", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unconnected_recipient_never_blocks_notification_creation() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    // Nobody is connected; the push is a no-op but the write succeeds.
    let user = Uuid::new_v4();
    let result = app
        .realtime
        .event_bridge
        .on_project_event(taskboard_core::events::ProjectEvent::MemberAdded {
            member_id: user,
            project_id: Uuid::new_v4(),
            project_name: "Apollo".to_string(),
        })
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().recipient, user);
}

#[tokio::test]
async fn health_check() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}

#[tokio::test]
async fn detailed_health_reports_database_and_channels() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let response = app.request("GET", "/api/health/detailed", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["database"], "connected");
    assert!(response.body["data"]["ws_connections"].is_u64());
}

#[tokio::test]
async fn pool_health_check_fails_after_close() {
    let Ok(url) = std::env::var("TASKBOARD_TEST_DATABASE_URL") else {
        return;
    };

    let config = taskboard_core::config::DatabaseConfig {
        url,
        max_connections: 2,
        min_connections: 1,
        connect_timeout_seconds: 10,
        idle_timeout_seconds: 300,
    };
    let db = taskboard_database::connection::DatabasePool::connect(&config)
        .await
        .expect("Failed to connect to test database");

    db.health_check().await.expect("pool should be reachable");

    db.close().await;
    assert!(db.health_check().await.is_err());
}
