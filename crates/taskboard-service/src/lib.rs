//! # taskboard-service
//!
//! Service layer. Services receive a [`context::RequestContext`] for
//! caller-scoped operations so every query is bound to the authenticated
//! identity.

pub mod context;
pub mod notification;

pub use context::RequestContext;
pub use notification::NotificationService;
