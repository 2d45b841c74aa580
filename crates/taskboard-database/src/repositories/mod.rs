//! Repository implementations.

pub mod notification;
