//! Persist-then-push notification dispatch.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use taskboard_core::result::AppResult;
use taskboard_entity::notification::{Notification, NotificationKind};
use taskboard_entity::refs::{ProjectRef, TaskRef};
use taskboard_service::NotificationService;

use crate::bus::{DeliveryStatus, NotificationBus};
use crate::message::NotificationPayload;

/// The single write entry point for producing a notification.
///
/// Persists the record first, then attempts a live push over the bus.
/// The stored row is authoritative: a failed or unheard push never
/// fails the call and never rolls back the write. Workflow code calls
/// this and nothing else in the realtime layer.
#[derive(Debug, Clone)]
pub struct Notifier {
    /// Notification persistence.
    service: Arc<NotificationService>,
    /// Broadcast transport.
    bus: Arc<dyn NotificationBus>,
}

impl Notifier {
    /// Creates a new notifier.
    pub fn new(service: Arc<NotificationService>, bus: Arc<dyn NotificationBus>) -> Self {
        Self { service, bus }
    }

    /// Creates a notification and pushes it to the recipient's live
    /// channels.
    ///
    /// Returns the persisted notification. Storage failure is surfaced
    /// to the caller; push failure is logged and swallowed.
    pub async fn notify(
        &self,
        recipient: Uuid,
        kind: NotificationKind,
        title: &str,
        message: &str,
        project: Option<ProjectRef>,
        task: Option<TaskRef>,
    ) -> AppResult<Notification> {
        let notification = self
            .service
            .create_notification(
                recipient,
                kind,
                title,
                message,
                project.as_ref().map(|p| p.id),
                task.as_ref().map(|t| t.id),
            )
            .await?;

        let payload = NotificationPayload::from_notification(&notification, project, task);
        match self.bus.publish(recipient, &payload).await {
            DeliveryStatus::Delivered(n) => {
                debug!(recipient = %recipient, kind = %kind, channels = n, "notification pushed");
            }
            DeliveryStatus::NoSubscribers => {
                debug!(recipient = %recipient, kind = %kind, "recipient not connected, stored only");
            }
            DeliveryStatus::TransportUnavailable => {
                warn!(recipient = %recipient, kind = %kind, "broadcast transport unavailable, stored only");
            }
        }

        Ok(notification)
    }
}
