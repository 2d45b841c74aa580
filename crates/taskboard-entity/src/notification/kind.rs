//! Notification kind enumeration.

use serde::{Deserialize, Serialize};

/// The closed set of notification kinds.
///
/// Stored as TEXT in the database and rendered in wire payloads as
/// snake_case strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A task was assigned to the recipient.
    TaskAssigned,
    /// A task assigned to the recipient was completed.
    TaskCompleted,
    /// The recipient was added to a project.
    ProjectAssigned,
    /// A comment was added on a task the recipient follows.
    /// Reserved: no workflow currently emits this kind.
    CommentAdded,
}

impl NotificationKind {
    /// Return the kind as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TaskAssigned => "task_assigned",
            Self::TaskCompleted => "task_completed",
            Self::ProjectAssigned => "project_assigned",
            Self::CommentAdded => "comment_added",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
