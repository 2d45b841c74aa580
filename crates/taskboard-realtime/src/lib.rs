//! # taskboard-realtime
//!
//! Real-time notification fan-out for TaskBoard. Provides:
//!
//! - Per-user delivery groups keyed by recipient ID
//! - A pluggable broadcast bus (in-memory single node, Redis multi-node)
//! - Domain event → notification translation
//! - Persist-then-push notification dispatch with best-effort delivery

pub mod bridge;
pub mod bus;
pub mod engine;
pub mod message;
pub mod notifier;
pub mod registry;

pub use bridge::EventBridge;
pub use bus::{DeliveryStatus, NotificationBus};
pub use engine::RealtimeEngine;
pub use notifier::Notifier;
pub use registry::GroupRegistry;
