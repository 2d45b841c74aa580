//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::NotificationKind;

/// A notification owned by a single recipient.
///
/// `read` is the only mutable field after creation, and it only ever
/// transitions false → true. The recipient never changes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The user this notification belongs to (not the actor who caused it).
    #[sqlx(rename = "recipient_id")]
    pub recipient: Uuid,
    /// What happened.
    pub kind: NotificationKind,
    /// Display title.
    pub title: String,
    /// Display body.
    pub message: String,
    /// Whether the recipient has read this notification.
    #[sqlx(rename = "is_read")]
    pub read: bool,
    /// Related project, if any (identity only, used for deep-linking).
    #[sqlx(rename = "related_project_id")]
    pub related_project: Option<Uuid>,
    /// Related task, if any (identity only, used for deep-linking).
    #[sqlx(rename = "related_task_id")]
    pub related_task: Option<Uuid>,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}
