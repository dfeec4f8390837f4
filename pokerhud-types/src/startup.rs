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

//! Startup-progress types shared by the HTTP status endpoint and the
//! startup WebSocket channel.

use serde::{Deserialize, Serialize};

/// The only socket message type recognized by the frontend.
pub const STARTUP_UPDATE_TYPE: &str = "startup_update";

/// Backend-reported initialization progress.
///
/// Returned by `GET /api/startup-status` and carried in the
/// [`SocketMessage`] payload of `startup_update` messages.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StartupStatus {
    pub steps_completed: u32,
    pub total_steps: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_step_name: Option<String>,
    pub is_complete: bool,
}

impl StartupStatus {
    /// Percentage of startup steps completed, rounded to the nearest
    /// integer. A `total_steps` of zero yields 0 rather than dividing by
    /// zero. Only meaningful while `!is_complete`.
    pub fn percent(&self) -> u32 {
        if self.total_steps == 0 {
            return 0;
        }
        ((self.steps_completed as f64 / self.total_steps as f64) * 100.0).round() as u32
    }
}

/// Envelope for messages on the startup WebSocket channel.
///
/// The `data` value is kept opaque here; consumers parse it according to
/// `msg_type`. Unknown types are ignored by the frontend.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SocketMessage {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub data: serde_json::Value,
}

impl SocketMessage {
    /// Parse the payload as a [`StartupStatus`] if this is a
    /// `startup_update` message.
    pub fn startup_update(&self) -> Option<StartupStatus> {
        if self.msg_type != STARTUP_UPDATE_TYPE {
            return None;
        }
        serde_json::from_value(self.data.clone()).ok()
    }
}
