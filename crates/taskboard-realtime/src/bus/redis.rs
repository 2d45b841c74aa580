//! Redis pub/sub bus for multi-node deployments.
//!
//! Each notification is PUBLISHed to `notifications:{recipient_id}`.
//! Every node runs a relay task that PSUBSCRIBEs to `notifications:*`
//! and forwards matching payloads into its local group registry, so a
//! recipient connected to any node in the process group receives the
//! push.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use redis::aio::ConnectionManager;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};
use uuid::Uuid;

use taskboard_core::error::AppError;
use taskboard_core::result::AppResult;

use crate::message::{NotificationPayload, OutboundMessage};
use crate::registry::GroupRegistry;

use super::{DeliveryStatus, NotificationBus};

/// Prefix for per-recipient pub/sub channels.
const CHANNEL_PREFIX: &str = "notifications:";

/// Relay reconnect backoff bounds.
const BACKOFF_INITIAL: Duration = Duration::from_secs(1);
const BACKOFF_MAX: Duration = Duration::from_secs(30);

/// Broadcast bus backed by Redis pub/sub.
#[derive(Clone)]
pub struct RedisBus {
    /// Publisher connection (reconnects automatically).
    conn: ConnectionManager,
}

impl std::fmt::Debug for RedisBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisBus").finish_non_exhaustive()
    }
}

impl RedisBus {
    /// Connects to Redis and spawns the inbound relay task.
    ///
    /// The relay forwards payloads published by any node into the local
    /// registry, reconnecting with backoff when the subscription drops.
    pub async fn connect(
        url: &str,
        registry: Arc<GroupRegistry>,
        shutdown: broadcast::Receiver<()>,
    ) -> AppResult<Self> {
        let client = redis::Client::open(url)
            .map_err(|e| AppError::configuration(format!("invalid Redis URL: {e}")))?;
        let conn = client.get_connection_manager().await.map_err(|e| {
            AppError::service_unavailable(format!("Redis connection failed: {e}"))
        })?;

        tokio::spawn(relay_loop(client, registry, shutdown));
        info!("Redis broadcast bus connected");

        Ok(Self { conn })
    }
}

#[async_trait]
impl NotificationBus for RedisBus {
    async fn publish(&self, recipient: Uuid, payload: &NotificationPayload) -> DeliveryStatus {
        let body = match serde_json::to_string(payload) {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "failed to serialize notification payload");
                return DeliveryStatus::TransportUnavailable;
            }
        };

        let mut conn = self.conn.clone();
        let result = redis::cmd("PUBLISH")
            .arg(format!("{CHANNEL_PREFIX}{recipient}"))
            .arg(body)
            .query_async::<i64>(&mut conn)
            .await;

        match result {
            Ok(0) => DeliveryStatus::NoSubscribers,
            Ok(n) => DeliveryStatus::Delivered(n as usize),
            Err(e) => {
                warn!(error = %e, "Redis PUBLISH failed");
                DeliveryStatus::TransportUnavailable
            }
        }
    }
}

/// Subscribes to the notification pattern and feeds the local registry,
/// reconnecting with exponential backoff until shutdown.
async fn relay_loop(
    client: redis::Client,
    registry: Arc<GroupRegistry>,
    mut shutdown: broadcast::Receiver<()>,
) {
    let mut backoff = BACKOFF_INITIAL;
    loop {
        match subscribe_and_relay(&client, &registry, &mut shutdown).await {
            RelayExit::Shutdown => {
                debug!("notification relay shutting down");
                return;
            }
            RelayExit::Disconnected(e) => {
                warn!(error = %e, "notification relay lost Redis, retrying in {:?}", backoff);
            }
        }
        tokio::select! {
            _ = tokio::time::sleep(backoff) => {}
            _ = shutdown.recv() => return,
        }
        backoff = (backoff * 2).min(BACKOFF_MAX);
    }
}

enum RelayExit {
    Shutdown,
    Disconnected(redis::RedisError),
}

async fn subscribe_and_relay(
    client: &redis::Client,
    registry: &GroupRegistry,
    shutdown: &mut broadcast::Receiver<()>,
) -> RelayExit {
    let mut pubsub = match client.get_async_pubsub().await {
        Ok(ps) => ps,
        Err(e) => return RelayExit::Disconnected(e),
    };
    if let Err(e) = pubsub.psubscribe(format!("{CHANNEL_PREFIX}*")).await {
        return RelayExit::Disconnected(e);
    }
    debug!("notification relay subscribed");

    let mut stream = pubsub.on_message();
    loop {
        tokio::select! {
            msg = stream.next() => {
                let Some(msg) = msg else {
                    return RelayExit::Disconnected(redis::RedisError::from((
                        redis::ErrorKind::IoError,
                        "pub/sub stream ended",
                    )));
                };
                relay_message(registry, &msg);
            }
            _ = shutdown.recv() => return RelayExit::Shutdown,
        }
    }
}

/// Decodes one pub/sub message and delivers it locally. Malformed
/// messages are logged and skipped.
fn relay_message(registry: &GroupRegistry, msg: &redis::Msg) {
    let channel = msg.get_channel_name();
    let Some(recipient) = channel
        .strip_prefix(CHANNEL_PREFIX)
        .and_then(|id| Uuid::parse_str(id).ok())
    else {
        warn!(channel, "ignoring pub/sub message on unexpected channel");
        return;
    };
    let payload: NotificationPayload = match msg
        .get_payload::<String>()
        .map_err(|e| e.to_string())
        .and_then(|raw| serde_json::from_str(&raw).map_err(|e| e.to_string()))
    {
        Ok(p) => p,
        Err(e) => {
            warn!(channel, error = %e, "ignoring malformed notification payload");
            return;
        }
    };
    let delivered = registry.deliver(
        recipient,
        &OutboundMessage::Notification {
            notification: payload,
        },
    );
    debug!(recipient = %recipient, delivered, "relayed notification");
}
