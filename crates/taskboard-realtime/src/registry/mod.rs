//! Per-user delivery groups and channel handles.

pub mod groups;
pub mod handle;

pub use groups::GroupRegistry;
pub use handle::{ChannelHandle, ChannelId};
