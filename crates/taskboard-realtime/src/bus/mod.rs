//! Broadcast bus abstraction.
//!
//! The bus carries persisted notifications to whatever live channels the
//! recipient holds, on this node or (with the Redis backend) on any node
//! in the process group. Publishing never fails the caller; the outcome
//! is reported as a [`DeliveryStatus`] for logging.

pub mod memory;
pub mod redis;

use async_trait::async_trait;
use uuid::Uuid;

use crate::message::NotificationPayload;

pub use memory::MemoryBus;
pub use redis::RedisBus;

/// Outcome of a best-effort publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    /// The payload reached this many local channels (Redis backend:
    /// this many subscribing nodes).
    Delivered(usize),
    /// Nobody was listening for this recipient.
    NoSubscribers,
    /// The broadcast transport is down; the stored row remains the
    /// source of truth.
    TransportUnavailable,
}

/// Best-effort fan-out of notifications to a recipient's live channels.
#[async_trait]
pub trait NotificationBus: Send + Sync + std::fmt::Debug {
    /// Publishes a notification payload addressed to one recipient.
    async fn publish(&self, recipient: Uuid, payload: &NotificationPayload) -> DeliveryStatus;
}
