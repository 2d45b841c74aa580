//! Project-related domain events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events related to project membership.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProjectEvent {
    /// A user was added as a project member.
    MemberAdded {
        /// The newly added member.
        member_id: Uuid,
        /// The project ID.
        project_id: Uuid,
        /// The project name (for display).
        project_name: String,
    },
}
