//! Real-time delivery configuration.

use serde::{Deserialize, Serialize};

/// Real-time (WebSocket) delivery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Per-connection outbound buffer size.
    #[serde(default = "default_channel_buffer")]
    pub channel_buffer_size: usize,
    /// Broadcast backend settings.
    #[serde(default)]
    pub broadcast: BroadcastConfig,
}

/// Broadcast backend selection.
///
/// `memory` is valid only for a single server instance; `redis` shares
/// group publishes across instances via pub/sub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastConfig {
    /// Backend provider: "memory" or "redis".
    #[serde(default = "default_provider")]
    pub provider: BroadcastProvider,
    /// Redis URL, required when provider is "redis".
    #[serde(default)]
    pub redis_url: Option<String>,
}

/// Available broadcast backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BroadcastProvider {
    /// In-process delivery only.
    Memory,
    /// Redis pub/sub relay between instances.
    Redis,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            channel_buffer_size: default_channel_buffer(),
            broadcast: BroadcastConfig::default(),
        }
    }
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            redis_url: None,
        }
    }
}

fn default_channel_buffer() -> usize {
    256
}

fn default_provider() -> BroadcastProvider {
    BroadcastProvider::Memory
}
