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

//! Startup-channel state transitions.
//!
//! The WebSocket side of the frontend is callback-driven; this module
//! turns those callbacks into typed [`ChannelEvent`]s and keeps the
//! decision logic in one pure function, [`on_channel_event`], so the
//! reconnect/poll-fallback behavior is testable without a socket.
//!
//! Reconnect attempts are gated on backend state, not on a retry counter:
//! once the backend reports online there is nothing to reconcile and the
//! loop stops arming itself.

use pokerhud_types::{SocketMessage, StartupStatus, STARTUP_UPDATE_TYPE};

/// Fixed backoff before re-opening the channel after it closes.
pub const RECONNECT_DELAY_MS: u32 = 2_000;
/// Poll period for the HTTP startup-status fallback while the channel is
/// down and the backend is not yet online.
pub const POLL_FALLBACK_MS: u32 = 500;

/// What happened on the channel, as reported by the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelEvent {
    Opened,
    Message(SocketMessage),
    Closed,
    Error(String),
}

/// What the owning component should do about it.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelDirective {
    /// Feed the raw socket-connected signal (pre-debounce).
    SetConnected(bool),
    /// Replace the displayed startup progress.
    ApplyStartup(StartupStatus),
    /// Arm a one-shot reconnect timer.
    ScheduleReconnect { after_ms: u32 },
    /// Start polling `GET /api/startup-status` as a live-update substitute.
    StartPollFallback { every_ms: u32 },
    /// Live updates are back (or no longer needed); stop polling.
    StopPollFallback,
}

/// Pure transition function for the startup channel.
///
/// `backend_online` is whether the unified status currently derives
/// `Ready`; it gates the reconnect loop and the poll fallback.
pub fn on_channel_event(event: ChannelEvent, backend_online: bool) -> Vec<ChannelDirective> {
    match event {
        ChannelEvent::Opened => vec![
            ChannelDirective::SetConnected(true),
            ChannelDirective::StopPollFallback,
        ],
        ChannelEvent::Message(msg) => match msg.startup_update() {
            Some(update) => vec![ChannelDirective::ApplyStartup(update)],
            None => {
                if msg.msg_type == STARTUP_UPDATE_TYPE {
                    log::warn!("dropping malformed startup_update payload");
                } else {
                    log::debug!("ignoring socket message type {:?}", msg.msg_type);
                }
                vec![]
            }
        },
        ChannelEvent::Closed | ChannelEvent::Error(_) => {
            if let ChannelEvent::Error(e) = &event {
                // Socket errors are logged, never rendered.
                log::error!("startup channel error: {e}");
            }
            let mut directives = vec![ChannelDirective::SetConnected(false)];
            if !backend_online {
                directives.push(ChannelDirective::ScheduleReconnect {
                    after_ms: RECONNECT_DELAY_MS,
                });
                directives.push(ChannelDirective::StartPollFallback {
                    every_ms: POLL_FALLBACK_MS,
                });
            }
            directives
        }
    }
}

/// Follow-up transitions after the debounced socket signal settles.
///
/// A close that arrives while the stable signal still reads connected is
/// gated out of re-arming at event time: the unified status still derives
/// `Ready` until the debounce window elapses. The settle is the first
/// moment the disconnect is visible, so the channel re-arms here when it
/// is really down and no reconnect is already pending.
pub fn on_socket_settled(
    connected: bool,
    channel_open: bool,
    reconnect_pending: bool,
) -> Vec<ChannelDirective> {
    if connected || channel_open || reconnect_pending {
        return vec![];
    }
    vec![
        ChannelDirective::ScheduleReconnect {
            after_ms: RECONNECT_DELAY_MS,
        },
        ChannelDirective::StartPollFallback {
            every_ms: POLL_FALLBACK_MS,
        },
    ]
}
