//! # taskboard-entity
//!
//! Domain entities for Taskboard.

pub mod notification;
pub mod refs;

pub use notification::{Notification, NotificationKind};
pub use refs::{ProjectRef, TaskRef};
