//! Wire message types and notification text builders.

pub mod builder;
pub mod types;

pub use types::{InboundMessage, NotificationPayload, OutboundMessage};
