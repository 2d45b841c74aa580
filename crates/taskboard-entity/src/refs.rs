//! Weak references to entities owned by the external relational layer.
//!
//! These carry identity plus a display string for deep-linking. They never
//! imply ownership: the referenced project or task may be deleted at any
//! time without affecting notifications that point at it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    /// Project ID.
    pub id: Uuid,
    /// Project name at the time the reference was taken.
    pub name: String,
}

impl ProjectRef {
    /// Create a new project reference.
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Reference to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRef {
    /// Task ID.
    pub id: Uuid,
    /// Task title at the time the reference was taken.
    pub title: String,
}

impl TaskRef {
    /// Create a new task reference.
    pub fn new(id: Uuid, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}
