//! Top-level real-time engine that ties the subsystems together.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::info;

use taskboard_core::config::realtime::{BroadcastProvider, RealtimeConfig};
use taskboard_core::error::AppError;
use taskboard_core::result::AppResult;

use taskboard_service::NotificationService;

use crate::bridge::EventBridge;
use crate::bus::{MemoryBus, NotificationBus, RedisBus};
use crate::notifier::Notifier;
use crate::registry::GroupRegistry;

/// Central real-time engine: group registry, broadcast bus, notifier,
/// and event bridge, wired according to configuration.
#[derive(Clone)]
pub struct RealtimeEngine {
    /// Local channel registry.
    pub registry: Arc<GroupRegistry>,
    /// Broadcast bus.
    pub bus: Arc<dyn NotificationBus>,
    /// Notification dispatch.
    pub notifier: Arc<Notifier>,
    /// Domain event translation.
    pub event_bridge: Arc<EventBridge>,
    /// Shutdown signal sender.
    shutdown_tx: broadcast::Sender<()>,
}

impl std::fmt::Debug for RealtimeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RealtimeEngine").finish()
    }
}

impl RealtimeEngine {
    /// Creates a new engine with the configured broadcast backend.
    pub async fn new(
        config: &RealtimeConfig,
        service: Arc<NotificationService>,
    ) -> AppResult<Self> {
        let (shutdown_tx, _) = broadcast::channel(1);
        let registry = Arc::new(GroupRegistry::new(config.channel_buffer_size));

        let bus: Arc<dyn NotificationBus> = match config.broadcast.provider {
            BroadcastProvider::Memory => {
                info!("broadcast backend: memory");
                Arc::new(MemoryBus::new(registry.clone()))
            }
            BroadcastProvider::Redis => {
                let url = config.broadcast.redis_url.as_deref().ok_or_else(|| {
                    AppError::configuration(
                        "realtime.broadcast.redis_url is required when provider is \"redis\"",
                    )
                })?;
                info!("broadcast backend: redis");
                Arc::new(RedisBus::connect(url, registry.clone(), shutdown_tx.subscribe()).await?)
            }
        };

        let notifier = Arc::new(Notifier::new(service, bus.clone()));
        let event_bridge = Arc::new(EventBridge::new(notifier.clone()));

        info!("real-time engine initialized");

        Ok(Self {
            registry,
            bus,
            notifier,
            event_bridge,
            shutdown_tx,
        })
    }

    /// Signals background tasks to stop.
    pub fn shutdown(&self) {
        info!("shutting down real-time engine");
        let _ = self.shutdown_tx.send(());
    }
}
