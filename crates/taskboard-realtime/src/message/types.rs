//! Inbound and outbound wire message definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use taskboard_entity::notification::{Notification, NotificationKind};
use taskboard_entity::refs::{ProjectRef, TaskRef};

/// Messages sent by the client to the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundMessage {
    /// Mark a notification as read.
    MarkAsRead {
        /// Notification ID.
        notification_id: Uuid,
    },
}

/// Messages sent by the server to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundMessage {
    /// Channel accepted and joined to the user's group.
    Connected {
        /// Authenticated user ID.
        user_id: Uuid,
    },
    /// Notification delivery.
    Notification {
        /// Notification payload.
        notification: NotificationPayload,
    },
    /// Error message.
    Error {
        /// Error code.
        code: String,
        /// Error description.
        message: String,
    },
}

impl OutboundMessage {
    /// Builds the channel acceptance message.
    pub fn connected(user_id: Uuid) -> Self {
        Self::Connected { user_id }
    }

    /// Builds an error message.
    pub fn error(code: &str, message: &str) -> Self {
        Self::Error {
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}

/// A notification as rendered on the wire.
///
/// Carries the project and task references expanded to `{id, name}` /
/// `{id, title}` objects (or explicit nulls), unlike the stored row
/// which only keeps the foreign IDs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationPayload {
    /// Notification ID.
    pub id: Uuid,
    /// Notification kind.
    pub kind: NotificationKind,
    /// Title.
    pub title: String,
    /// Message body.
    pub message: String,
    /// Read flag.
    pub read: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Related project, if any.
    pub project: Option<ProjectRef>,
    /// Related task, if any.
    pub task: Option<TaskRef>,
}

impl NotificationPayload {
    /// Builds a payload from a stored notification and its expanded refs.
    pub fn from_notification(
        notification: &Notification,
        project: Option<ProjectRef>,
        task: Option<TaskRef>,
    ) -> Self {
        Self {
            id: notification.id,
            kind: notification.kind,
            title: notification.title.clone(),
            message: notification.message.clone(),
            read: notification.read,
            created_at: notification.created_at,
            project,
            task,
        }
    }
}
