//! In-memory bus for single-node deployments.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::message::{NotificationPayload, OutboundMessage};
use crate::registry::GroupRegistry;

use super::{DeliveryStatus, NotificationBus};

/// Delivers directly through the local group registry.
#[derive(Debug)]
pub struct MemoryBus {
    /// Local channel registry.
    registry: Arc<GroupRegistry>,
}

impl MemoryBus {
    /// Creates a new in-memory bus over the given registry.
    pub fn new(registry: Arc<GroupRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl NotificationBus for MemoryBus {
    async fn publish(&self, recipient: Uuid, payload: &NotificationPayload) -> DeliveryStatus {
        let msg = OutboundMessage::Notification {
            notification: payload.clone(),
        };
        match self.registry.deliver(recipient, &msg) {
            0 => DeliveryStatus::NoSubscribers,
            n => DeliveryStatus::Delivered(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use taskboard_entity::notification::NotificationKind;

    fn payload() -> NotificationPayload {
        NotificationPayload {
            id: Uuid::new_v4(),
            kind: NotificationKind::TaskAssigned,
            title: "New task assigned".into(),
            message: "m".into(),
            read: false,
            created_at: Utc::now(),
            project: None,
            task: None,
        }
    }

    #[tokio::test]
    async fn publish_reports_local_channel_count() {
        let registry = Arc::new(GroupRegistry::new(8));
        let bus = MemoryBus::new(registry.clone());
        let user = Uuid::new_v4();
        let (_h1, mut rx1) = registry.join(user, "alice");
        let (_h2, _rx2) = registry.join(user, "alice");

        let status = bus.publish(user, &payload()).await;
        assert_eq!(status, DeliveryStatus::Delivered(2));
        assert!(matches!(
            rx1.recv().await,
            Some(OutboundMessage::Notification { .. })
        ));
    }

    #[tokio::test]
    async fn publish_without_listeners_reports_no_subscribers() {
        let registry = Arc::new(GroupRegistry::new(8));
        let bus = MemoryBus::new(registry);
        let status = bus.publish(Uuid::new_v4(), &payload()).await;
        assert_eq!(status, DeliveryStatus::NoSubscribers);
    }
}
