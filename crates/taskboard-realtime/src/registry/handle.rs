//! Individual delivery channel handle.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::message::OutboundMessage;

/// Unique channel identifier.
pub type ChannelId = Uuid;

/// A handle to one live delivery channel.
///
/// Holds the sender half for pushing messages to the connected client,
/// plus metadata about the authenticated user. The receiving half lives
/// inside the WebSocket task that created the handle.
#[derive(Debug)]
pub struct ChannelHandle {
    /// Unique channel ID.
    pub id: ChannelId,
    /// User this channel is bound to.
    pub user_id: Uuid,
    /// Username (cached for logging).
    pub username: String,
    /// Sender for outbound messages.
    sender: mpsc::Sender<OutboundMessage>,
    /// When the channel was established.
    pub connected_at: DateTime<Utc>,
    /// Whether the channel is still alive.
    alive: AtomicBool,
}

impl ChannelHandle {
    /// Creates a new channel handle bound to a user.
    pub fn new(user_id: Uuid, username: String, sender: mpsc::Sender<OutboundMessage>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            username,
            sender,
            connected_at: Utc::now(),
            alive: AtomicBool::new(true),
        }
    }

    /// Pushes an outbound message to this channel without blocking.
    ///
    /// Returns `true` if the message was accepted. A full buffer drops
    /// the message; a closed receiver marks the channel dead.
    pub fn send(&self, msg: OutboundMessage) -> bool {
        if !self.is_alive() {
            return false;
        }
        match self.sender.try_send(msg) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(_)) => {
                tracing::warn!(channel_id = %self.id, "send buffer full, dropping message");
                false
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                self.mark_dead();
                false
            }
        }
    }

    /// Checks whether the channel is still alive.
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    /// Marks the channel as dead.
    pub fn mark_dead(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(buffer: usize) -> (ChannelHandle, mpsc::Receiver<OutboundMessage>) {
        let (tx, rx) = mpsc::channel(buffer);
        (ChannelHandle::new(Uuid::new_v4(), "alice".into(), tx), rx)
    }

    #[tokio::test]
    async fn send_delivers_to_receiver() {
        let (h, mut rx) = handle(4);
        assert!(h.send(OutboundMessage::connected(h.user_id)));
        assert!(rx.recv().await.is_some());
    }

    #[tokio::test]
    async fn full_buffer_drops_without_killing_channel() {
        let (h, _rx) = handle(1);
        assert!(h.send(OutboundMessage::connected(h.user_id)));
        assert!(!h.send(OutboundMessage::connected(h.user_id)));
        assert!(h.is_alive());
    }

    #[tokio::test]
    async fn closed_receiver_marks_dead() {
        let (h, rx) = handle(1);
        drop(rx);
        assert!(!h.send(OutboundMessage::connected(h.user_id)));
        assert!(!h.is_alive());
    }
}
