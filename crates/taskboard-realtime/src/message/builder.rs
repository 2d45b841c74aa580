//! Notification title and body text rendering.
//!
//! Pure functions so the texts can be tested without touching storage
//! or transport.

/// Title for a task assignment.
pub fn task_assigned_title(reassignment: bool) -> &'static str {
    if reassignment {
        "Task assigned"
    } else {
        "New task assigned"
    }
}

/// Body for a task assignment.
pub fn task_assigned_message(task_title: &str, project_name: &str, reassignment: bool) -> String {
    if reassignment {
        format!("You have been assigned the task: {task_title}")
    } else {
        format!("You have been assigned the task \"{task_title}\" in the project \"{project_name}\"")
    }
}

/// Title for a task completion.
pub fn task_completed_title() -> &'static str {
    "Task completed"
}

/// Body for a task completion.
pub fn task_completed_message(task_title: &str) -> String {
    format!("You have completed the task \"{task_title}\"")
}

/// Title for a project membership grant.
pub fn project_assigned_title() -> &'static str {
    "You have been added to a project"
}

/// Body for a project membership grant.
pub fn project_assigned_message(project_name: &str) -> String {
    format!("You have been added to the project \"{project_name}\"")
}
