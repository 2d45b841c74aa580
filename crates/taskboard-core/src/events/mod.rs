//! Domain events emitted by workflow code.
//!
//! Workflow collaborators (task and project mutation endpoints) construct
//! these after their own authorized mutation commits, and hand them to the
//! real-time event bridge. Each variant carries exactly the fields its
//! notification needs.

pub mod project;
pub mod task;

pub use project::ProjectEvent;
pub use task::TaskEvent;
