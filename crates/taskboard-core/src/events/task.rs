//! Task-related domain events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events related to task lifecycle changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TaskEvent {
    /// A task was created with an assignee, or an existing task was
    /// reassigned to a different non-null user.
    Assigned {
        /// The user the task is now assigned to.
        assignee_id: Uuid,
        /// The task ID.
        task_id: Uuid,
        /// The task title (for display).
        task_title: String,
        /// The project the task belongs to.
        project_id: Uuid,
        /// The project name (for display).
        project_name: String,
        /// True when an existing task changed hands rather than being
        /// newly created.
        reassignment: bool,
    },
    /// A task's status transitioned into "completed" from a
    /// non-completed state.
    Completed {
        /// The task's assignee.
        assignee_id: Uuid,
        /// The task ID.
        task_id: Uuid,
        /// The task title (for display).
        task_title: String,
        /// The project the task belongs to.
        project_id: Uuid,
        /// The project name (for display).
        project_name: String,
    },
}
