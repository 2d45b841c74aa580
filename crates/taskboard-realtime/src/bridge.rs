//! Domain event → notification translation.
//!
//! The single integration point workflow code calls after completing
//! its own authorized mutation. Decides the recipient, kind, and
//! display text for each event, then dispatches through the
//! [`Notifier`].

use std::sync::Arc;

use taskboard_core::events::{ProjectEvent, TaskEvent};
use taskboard_core::result::AppResult;
use taskboard_entity::notification::{Notification, NotificationKind};
use taskboard_entity::refs::{ProjectRef, TaskRef};

use crate::message::builder;
use crate::notifier::Notifier;

/// Translates domain events into persisted, pushed notifications.
#[derive(Debug, Clone)]
pub struct EventBridge {
    /// Notification dispatch.
    notifier: Arc<Notifier>,
}

impl EventBridge {
    /// Creates a new event bridge.
    pub fn new(notifier: Arc<Notifier>) -> Self {
        Self { notifier }
    }

    /// Handles a task lifecycle event.
    pub async fn on_task_event(&self, event: TaskEvent) -> AppResult<Notification> {
        match event {
            TaskEvent::Assigned {
                assignee_id,
                task_id,
                task_title,
                project_id,
                project_name,
                reassignment,
            } => {
                let title = builder::task_assigned_title(reassignment);
                let message =
                    builder::task_assigned_message(&task_title, &project_name, reassignment);
                self.notifier
                    .notify(
                        assignee_id,
                        NotificationKind::TaskAssigned,
                        title,
                        &message,
                        Some(ProjectRef::new(project_id, project_name)),
                        Some(TaskRef::new(task_id, task_title)),
                    )
                    .await
            }
            TaskEvent::Completed {
                assignee_id,
                task_id,
                task_title,
                project_id,
                project_name,
            } => {
                let message = builder::task_completed_message(&task_title);
                self.notifier
                    .notify(
                        assignee_id,
                        NotificationKind::TaskCompleted,
                        builder::task_completed_title(),
                        &message,
                        Some(ProjectRef::new(project_id, project_name)),
                        Some(TaskRef::new(task_id, task_title)),
                    )
                    .await
            }
        }
    }

    /// Handles a project membership event.
    pub async fn on_project_event(&self, event: ProjectEvent) -> AppResult<Notification> {
        match event {
            ProjectEvent::MemberAdded {
                member_id,
                project_id,
                project_name,
            } => {
                let message = builder::project_assigned_message(&project_name);
                self.notifier
                    .notify(
                        member_id,
                        NotificationKind::ProjectAssigned,
                        builder::project_assigned_title(),
                        &message,
                        Some(ProjectRef::new(project_id, project_name)),
                        None,
                    )
                    .await
            }
        }
    }
}
