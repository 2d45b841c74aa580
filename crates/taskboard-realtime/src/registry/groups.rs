//! Group registry — per-user groups of live delivery channels.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::message::OutboundMessage;

use super::handle::ChannelHandle;

/// Registry of all live delivery channels, grouped by recipient.
///
/// A user may hold several channels at once (multiple tabs, devices);
/// delivery to a user fans out to every live channel in the group.
#[derive(Debug)]
pub struct GroupRegistry {
    /// User ID → channels in that user's group.
    groups: DashMap<Uuid, Vec<Arc<ChannelHandle>>>,
    /// Buffer size for per-channel outbound queues.
    buffer_size: usize,
}

impl GroupRegistry {
    /// Creates a new, empty registry.
    pub fn new(buffer_size: usize) -> Self {
        Self {
            groups: DashMap::new(),
            buffer_size,
        }
    }

    /// Joins a new channel to the user's group.
    ///
    /// Returns the handle (held by the registry and the caller) and the
    /// receiving half of its outbound queue.
    pub fn join(
        &self,
        user_id: Uuid,
        username: &str,
    ) -> (Arc<ChannelHandle>, mpsc::Receiver<OutboundMessage>) {
        let (tx, rx) = mpsc::channel(self.buffer_size);
        let handle = Arc::new(ChannelHandle::new(user_id, username.to_string(), tx));
        self.groups
            .entry(user_id)
            .or_default()
            .push(handle.clone());
        tracing::debug!(user_id = %user_id, channel_id = %handle.id, "channel joined group");
        (handle, rx)
    }

    /// Removes a channel from its user's group. Idempotent.
    pub fn leave(&self, handle: &ChannelHandle) {
        handle.mark_dead();
        if let Some(mut group) = self.groups.get_mut(&handle.user_id) {
            group.retain(|h| h.id != handle.id);
            if group.is_empty() {
                drop(group);
                self.groups.remove_if(&handle.user_id, |_, g| g.is_empty());
            }
        }
        tracing::debug!(user_id = %handle.user_id, channel_id = %handle.id, "channel left group");
    }

    /// Delivers a message to every live channel in the recipient's group.
    ///
    /// Returns the number of channels that accepted the message. Dead
    /// channels encountered along the way are pruned.
    pub fn deliver(&self, recipient: Uuid, msg: &OutboundMessage) -> usize {
        let mut delivered = 0;
        let mut saw_dead = false;
        if let Some(group) = self.groups.get(&recipient) {
            for handle in group.iter() {
                if handle.send(msg.clone()) {
                    delivered += 1;
                } else if !handle.is_alive() {
                    saw_dead = true;
                }
            }
        }
        if saw_dead {
            if let Some(mut group) = self.groups.get_mut(&recipient) {
                group.retain(|h| h.is_alive());
            }
        }
        delivered
    }

    /// Returns the number of channels in a user's group.
    pub fn member_count(&self, user_id: Uuid) -> usize {
        self.groups.get(&user_id).map(|g| g.len()).unwrap_or(0)
    }

    /// Returns the number of non-empty groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Returns the total number of registered channels.
    pub fn connection_count(&self) -> usize {
        self.groups.iter().map(|g| g.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> GroupRegistry {
        GroupRegistry::new(8)
    }

    #[tokio::test]
    async fn join_then_deliver_reaches_channel() {
        let reg = registry();
        let user = Uuid::new_v4();
        let (_handle, mut rx) = reg.join(user, "alice");

        let n = reg.deliver(user, &OutboundMessage::connected(user));
        assert_eq!(n, 1);
        assert!(rx.recv().await.is_some());
    }

    #[tokio::test]
    async fn deliver_fans_out_to_all_channels_of_user() {
        let reg = registry();
        let user = Uuid::new_v4();
        let (_h1, mut rx1) = reg.join(user, "alice");
        let (_h2, mut rx2) = reg.join(user, "alice");

        let n = reg.deliver(user, &OutboundMessage::connected(user));
        assert_eq!(n, 2);
        assert!(rx1.recv().await.is_some());
        assert!(rx2.recv().await.is_some());
    }

    #[tokio::test]
    async fn deliver_to_unknown_user_reaches_nobody() {
        let reg = registry();
        let user = Uuid::new_v4();
        let (_h, mut rx) = reg.join(user, "alice");

        let n = reg.deliver(Uuid::new_v4(), &OutboundMessage::connected(user));
        assert_eq!(n, 0);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn leave_is_idempotent_and_empties_group() {
        let reg = registry();
        let user = Uuid::new_v4();
        let (handle, _rx) = reg.join(user, "alice");
        assert_eq!(reg.member_count(user), 1);

        reg.leave(&handle);
        reg.leave(&handle);
        assert_eq!(reg.member_count(user), 0);
        assert_eq!(reg.group_count(), 0);
    }

    #[tokio::test]
    async fn messages_arrive_in_publish_order() {
        let reg = registry();
        let user = Uuid::new_v4();
        let (_h, mut rx) = reg.join(user, "alice");

        for _ in 0..3 {
            reg.deliver(user, &OutboundMessage::connected(user));
        }
        reg.deliver(
            user,
            &OutboundMessage::Error {
                code: "last".into(),
                message: "last".into(),
            },
        );

        let mut kinds = Vec::new();
        for _ in 0..4 {
            kinds.push(rx.recv().await.unwrap());
        }
        assert!(matches!(kinds[0], OutboundMessage::Connected { .. }));
        assert!(matches!(kinds[3], OutboundMessage::Error { .. }));
    }

    #[tokio::test]
    async fn dead_channels_are_pruned_on_delivery() {
        let reg = registry();
        let user = Uuid::new_v4();
        let (_h1, rx1) = reg.join(user, "alice");
        let (_h2, mut rx2) = reg.join(user, "alice");
        drop(rx1);

        let n = reg.deliver(user, &OutboundMessage::connected(user));
        assert_eq!(n, 1);
        assert_eq!(reg.member_count(user), 1);
        assert!(rx2.recv().await.is_some());
    }
}
