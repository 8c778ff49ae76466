//! Real-time position updates, over WebSocket (`/ws`) or Server-Sent Events (`/events`).
//!
//! Both transports carry the same `update_position` events. Subscriptions start when the
//! request is accepted; nothing published before that is replayed.

use crate::api::schemas::UpdateFrame;
use crate::infrastructure::broadcaster::UpdateBroadcaster;
use crate::infrastructure::entities::{PositionUpdate, UPDATE_EVENT};
use async_stream::stream;
use axum::Router;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::sse::{Event, KeepAlive};
use axum::response::{Response, Sse};
use axum::routing::get;
use di_axum::Inject;
use futures_util::{SinkExt, Stream, StreamExt};
use log::{debug, warn};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

pub fn router() -> Router {
    Router::new()
        .route("/ws", get(websocket))
        .route("/events", get(event_stream))
}

async fn websocket(
    Inject(broadcaster): Inject<UpdateBroadcaster>,
    ws: WebSocketUpgrade,
) -> Response {
    // subscribe before the upgrade completes so the client cannot miss an update in between
    let updates = broadcaster.subscribe();
    debug!(
        "WebSocket upgrade accepted, {} subscriber(s) now listening",
        broadcaster.subscriber_count()
    );
    ws.on_upgrade(move |socket| forward_updates(socket, updates))
}

pub fn encode_frame(update: &PositionUpdate) -> serde_json::Result<String> {
    serde_json::to_string(&UpdateFrame {
        event: UPDATE_EVENT,
        data: update,
    })
}

async fn forward_updates(socket: WebSocket, mut updates: broadcast::Receiver<PositionUpdate>) {
    debug!("WebSocket client connected");

    let (mut sender, mut receiver) = socket.split();

    let mut send_task = tokio::spawn(async move {
        loop {
            match updates.recv().await {
                Ok(update) => match encode_frame(&update) {
                    Ok(frame) => {
                        if sender.send(Message::Text(frame.into())).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => warn!("failed to encode position update: {e}"),
                },
                Err(RecvError::Lagged(skipped)) => {
                    debug!("WebSocket client lagged, skipped {skipped} update(s)");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    // clients have nothing to say; drain until they leave
    let mut recv_task = tokio::spawn(async move {
        while let Some(message) = receiver.next().await {
            match message {
                Ok(Message::Close(_)) => break,
                Ok(_) => {}
                Err(e) => {
                    debug!("WebSocket error: {e}");
                    break;
                }
            }
        }
    });

    // dropping a JoinHandle does not stop its task; the survivor must release the subscription
    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    debug!("WebSocket client disconnected");
}

async fn event_stream(
    Inject(broadcaster): Inject<UpdateBroadcaster>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let mut updates = broadcaster.subscribe();

    let stream = stream! {
        loop {
            match updates.recv().await {
                Ok(update) => {
                    yield Event::default().event(UPDATE_EVENT).json_data(&update);
                }
                Err(RecvError::Lagged(skipped)) => {
                    debug!("event stream lagged, skipped {skipped} update(s)");
                }
                Err(RecvError::Closed) => break,
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}
