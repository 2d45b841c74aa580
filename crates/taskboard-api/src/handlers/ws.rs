//! WebSocket delivery channel handler.
//!
//! Authenticates before the upgrade: a connection without a valid token
//! is rejected with 401 and never joins a group.

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{Query, State, WebSocketUpgrade};
use axum::response::Response;
use tracing::{debug, info, warn};

use taskboard_core::error::AppError;
use taskboard_realtime::message::{InboundMessage, OutboundMessage};

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for WebSocket authentication.
#[derive(Debug, serde::Deserialize)]
pub struct WsQuery {
    /// JWT access token.
    pub token: Option<String>,
}

/// GET /ws?token={jwt} — WebSocket upgrade.
pub async fn ws_upgrade(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
    Query(query): Query<WsQuery>,
) -> Result<Response, ApiError> {
    let token = query
        .token
        .ok_or_else(|| AppError::unauthorized("Missing token query parameter"))?;
    let claims = state.jwt_decoder.decode_access_token(&token)?;

    Ok(ws.on_upgrade(move |socket| {
        handle_delivery_channel(state, claims.user_id(), claims.username, socket)
    }))
}

/// Runs one delivery channel until the peer disconnects.
async fn handle_delivery_channel(
    state: AppState,
    user_id: uuid::Uuid,
    username: String,
    mut socket: WebSocket,
) {
    let (handle, mut outbound_rx) = state.realtime.registry.join(user_id, &username);
    let channel_id = handle.id;

    info!(channel_id = %channel_id, user_id = %user_id, "delivery channel established");

    if send_json(&mut socket, &OutboundMessage::connected(user_id))
        .await
        .is_err()
    {
        state.realtime.registry.leave(&handle);
        return;
    }

    loop {
        tokio::select! {
            outbound = outbound_rx.recv() => {
                let Some(msg) = outbound else { break };
                if send_json(&mut socket, &msg).await.is_err() {
                    break;
                }
            }
            inbound = socket.recv() => {
                match inbound {
                    Some(Ok(Message::Text(text))) => {
                        handle_inbound(&state, user_id, &text, &mut socket).await;
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        warn!(channel_id = %channel_id, error = %e, "WebSocket error");
                        break;
                    }
                }
            }
        }
    }

    state.realtime.registry.leave(&handle);
    info!(channel_id = %channel_id, user_id = %user_id, "delivery channel closed");
}

/// Processes one inbound control message.
///
/// `mark_as_read` is fire-and-forget: failures are logged, nothing is
/// echoed. Unparseable input gets an error reply but does not close the
/// channel.
async fn handle_inbound(state: &AppState, user_id: uuid::Uuid, text: &str, socket: &mut WebSocket) {
    match serde_json::from_str::<InboundMessage>(text) {
        Ok(InboundMessage::MarkAsRead { notification_id }) => {
            let service = state.notification_service.clone();
            tokio::spawn(async move {
                if let Err(e) = service.mark_read_for(user_id, notification_id).await {
                    debug!(notification_id = %notification_id, error = %e, "mark_as_read failed");
                }
            });
        }
        Err(e) => {
            debug!(error = %e, "unparseable inbound message");
            let reply = OutboundMessage::error("invalid_message", "Could not parse message");
            let _ = send_json(socket, &reply).await;
        }
    }
}

/// Serializes a message and sends it as a text frame.
async fn send_json(socket: &mut WebSocket, msg: &OutboundMessage) -> Result<(), AppError> {
    let text = serde_json::to_string(msg)?;
    socket
        .send(Message::Text(text.into()))
        .await
        .map_err(|e| AppError::internal(format!("WebSocket send failed: {e}")))
}
