/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Startup-channel transport wiring.
//!
//! Translates the callback-based WebSocket surface into typed
//! [`ChannelEvent`]s on a single `Callback`, so the owning component only
//! ever deals with the pure transition function in `pokerhud_client`.
//! Dropping the returned [`WebSocketTask`] closes the connection.

use pokerhud_client::ChannelEvent;
use pokerhud_types::SocketMessage;
use yew::prelude::Callback;
use yew_websocket::websocket::{Text, WebSocketService, WebSocketStatus, WebSocketTask};

/// Inbound text frame from the socket service.
pub struct InboundText(pub anyhow::Result<String>);

impl From<Text> for InboundText {
    fn from(text: Text) -> Self {
        Self(text)
    }
}

/// Open the startup channel; every socket callback lands on `on_event`.
pub fn connect(url: &str, on_event: Callback<ChannelEvent>) -> anyhow::Result<WebSocketTask> {
    let on_message = {
        let on_event = on_event.clone();
        Callback::from(move |InboundText(frame)| match frame {
            Ok(raw) => match serde_json::from_str::<SocketMessage>(&raw) {
                Ok(msg) => on_event.emit(ChannelEvent::Message(msg)),
                Err(e) => log::warn!("undecodable startup channel frame: {e}"),
            },
            Err(e) => on_event.emit(ChannelEvent::Error(format!("{e}"))),
        })
    };
    let notification = Callback::from(move |status| match status {
        WebSocketStatus::Opened => on_event.emit(ChannelEvent::Opened),
        WebSocketStatus::Closed => on_event.emit(ChannelEvent::Closed),
        WebSocketStatus::Error => on_event.emit(ChannelEvent::Error("WebSocket error".to_string())),
    });
    log::debug!("startup channel connecting to {url}");
    let task = WebSocketService::connect_text(url, on_message, notification)?;
    Ok(task)
}
