//! End-to-end tests for notification creation, querying, and read state.

use http::StatusCode;
use uuid::Uuid;

use taskboard_core::events::{ProjectEvent, TaskEvent};

use crate::helpers::TestApp;

fn assigned_event(assignee: Uuid, task_id: Uuid, project_id: Uuid) -> TaskEvent {
    TaskEvent::Assigned {
        assignee_id: assignee,
        task_id,
        task_title: "Write release notes".to_string(),
        project_id,
        project_name: "Apollo".to_string(),
        reassignment: false,
    }
}

#[tokio::test]
async fn task_assignment_creates_one_unread_notification() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let user = Uuid::new_v4();
    let task_id = Uuid::new_v4();
    let project_id = Uuid::new_v4();

    app.realtime
        .event_bridge
        .on_task_event(assigned_event(user, task_id, project_id))
        .await
        .expect("event dispatch failed");

    let token = app.token_for(user, "alice");
    let response = app
        .request("GET", "/api/notifications", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["kind"], "task_assigned");
    assert_eq!(items[0]["read"], false);
    assert!(!items[0]["title"].as_str().unwrap().is_empty());
    assert_eq!(items[0]["related_task"], task_id.to_string());
    assert_eq!(items[0]["related_project"], project_id.to_string());
}

#[tokio::test]
async fn completion_adds_second_notification_leaving_first_untouched() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let user = Uuid::new_v4();
    let task_id = Uuid::new_v4();
    let project_id = Uuid::new_v4();

    app.realtime
        .event_bridge
        .on_task_event(assigned_event(user, task_id, project_id))
        .await
        .unwrap();
    app.realtime
        .event_bridge
        .on_task_event(TaskEvent::Completed {
            assignee_id: user,
            task_id,
            task_title: "Write release notes".to_string(),
            project_id,
            project_name: "Apollo".to_string(),
        })
        .await
        .unwrap();

    let token = app.token_for(user, "alice");
    let response = app
        .request("GET", "/api/notifications", None, Some(&token))
        .await;

    let items = response.body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    // Newest first.
    assert_eq!(items[0]["kind"], "task_completed");
    assert_eq!(items[1]["kind"], "task_assigned");
    assert_eq!(items[1]["read"], false);
}

#[tokio::test]
async fn project_membership_creates_project_assigned_notification() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let member = Uuid::new_v4();
    let project_id = Uuid::new_v4();

    app.realtime
        .event_bridge
        .on_project_event(ProjectEvent::MemberAdded {
            member_id: member,
            project_id,
            project_name: "Apollo".to_string(),
        })
        .await
        .unwrap();

    let token = app.token_for(member, "bob");
    let response = app
        .request("GET", "/api/notifications", None, Some(&token))
        .await;

    let items = response.body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["kind"], "project_assigned");
    assert_eq!(items[0]["related_project"], project_id.to_string());
    assert!(items[0]["related_task"].is_null());
}

#[tokio::test]
async fn mark_read_is_idempotent() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let user = Uuid::new_v4();

    let notification = app
        .realtime
        .event_bridge
        .on_task_event(assigned_event(user, Uuid::new_v4(), Uuid::new_v4()))
        .await
        .unwrap();

    let token = app.token_for(user, "alice");
    let path = format!("/api/notifications/{}/read", notification.id);

    let first = app.request("PUT", &path, None, Some(&token)).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["data"]["read"], true);

    let second = app.request("PUT", &path, None, Some(&token)).await;
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(second.body["data"]["read"], true);

    let count = app
        .request("GET", "/api/notifications/unread-count", None, Some(&token))
        .await;
    assert_eq!(count.body["data"]["count"], 0);
}

#[tokio::test]
async fn mark_all_read_reports_how_many_changed() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let user = Uuid::new_v4();

    for _ in 0..3 {
        app.realtime
            .event_bridge
            .on_task_event(assigned_event(user, Uuid::new_v4(), Uuid::new_v4()))
            .await
            .unwrap();
    }

    let token = app.token_for(user, "alice");
    let first = app
        .request("PUT", "/api/notifications/read-all", None, Some(&token))
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["data"]["marked"], 3);

    let again = app
        .request("PUT", "/api/notifications/read-all", None, Some(&token))
        .await;
    assert_eq!(again.body["data"]["marked"], 0);
}

#[tokio::test]
async fn recipients_never_see_each_others_notifications() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let alice = Uuid::new_v4();
    let mallory = Uuid::new_v4();

    let notification = app
        .realtime
        .event_bridge
        .on_task_event(assigned_event(alice, Uuid::new_v4(), Uuid::new_v4()))
        .await
        .unwrap();

    let mallory_token = app.token_for(mallory, "mallory");

    let list = app
        .request("GET", "/api/notifications", None, Some(&mallory_token))
        .await;
    assert!(list.body["data"]["items"].as_array().unwrap().is_empty());

    let get = app
        .request(
            "GET",
            &format!("/api/notifications/{}", notification.id),
            None,
            Some(&mallory_token),
        )
        .await;
    assert_eq!(get.status, StatusCode::NOT_FOUND);

    let mark = app
        .request(
            "PUT",
            &format!("/api/notifications/{}/read", notification.id),
            None,
            Some(&mallory_token),
        )
        .await;
    assert_eq!(mark.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_requires_authentication() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let response = app.request("GET", "/api/notifications", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn pagination_caps_and_pages() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };
    let user = Uuid::new_v4();

    for _ in 0..3 {
        app.realtime
            .event_bridge
            .on_task_event(assigned_event(user, Uuid::new_v4(), Uuid::new_v4()))
            .await
            .unwrap();
    }

    let token = app.token_for(user, "alice");
    let response = app
        .request(
            "GET",
            "/api/notifications?page=1&per_page=2",
            None,
            Some(&token),
        )
        .await;

    let data = &response.body["data"];
    assert_eq!(data["items"].as_array().unwrap().len(), 2);
    assert_eq!(data["total_items"], 3);
    assert_eq!(data["total_pages"], 2);
    assert_eq!(data["has_next"], true);
}
