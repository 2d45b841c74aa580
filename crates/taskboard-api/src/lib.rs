//! # taskboard-api
//!
//! HTTP API layer for TaskBoard notifications built on Axum.
//!
//! Provides the notification REST endpoints, the WebSocket delivery
//! channel upgrade, extractors, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
