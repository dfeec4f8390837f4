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

//! Unified backend status derivation.
//!
//! Combines the four independently-updating liveness signals into the one
//! chip the nav bar renders. The derivation is pure and recomputed per
//! render; nothing here is stored. The socket and health inputs are the
//! *debounced stable* values so short-lived disconnects do not flicker
//! through the chip.

use pokerhud_types::StartupStatus;

/// Debounce window for the persistent socket-connection signal.
pub const SOCKET_DEBOUNCE_MS: u32 = 400;
/// Debounce window for the health-check status string.
pub const HEALTH_DEBOUNCE_MS: u32 = 600;

/// Inputs to the derivation, already debounced where applicable.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusInputs {
    /// Did the last health fetch reach the API at all?
    pub api_online: bool,
    /// Stable value of the startup-channel connection signal.
    pub socket_connected: bool,
    /// Stable value of the health-check status string.
    pub health_status: String,
    /// Latest startup progress, if any has been received.
    pub startup: Option<StartupStatus>,
}

/// The four states the chip can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendState {
    Ready,
    BackendDown,
    Degraded,
    Starting,
}

impl BackendState {
    /// CSS class controlling the chip color.
    pub fn css_class(&self) -> &'static str {
        match self {
            BackendState::Ready => "status-ready",
            BackendState::BackendDown => "status-down",
            BackendState::Degraded => "status-degraded",
            BackendState::Starting => "status-starting",
        }
    }
}

/// One coherent status label/state, derived per render.
#[derive(Debug, Clone, PartialEq)]
pub struct UnifiedStatus {
    pub state: BackendState,
    pub label: String,
}

/// Derive the unified status. Precedence is evaluated top-to-bottom,
/// first match wins:
///
/// 1. API reachable, socket connected, health "healthy" -> `Ready`.
/// 2. API unreachable or socket down -> `BackendDown`, startup-aware label.
/// 3. Health not "healthy" -> `Degraded`.
/// 4. Otherwise -> `Starting`, startup-aware label.
pub fn unified_status(inputs: &StatusInputs) -> UnifiedStatus {
    let healthy = inputs.health_status == "healthy";

    if inputs.api_online && inputs.socket_connected && healthy {
        return UnifiedStatus {
            state: BackendState::Ready,
            label: "Backend Online".to_string(),
        };
    }

    if !inputs.api_online || !inputs.socket_connected {
        return UnifiedStatus {
            state: BackendState::BackendDown,
            label: offline_label(inputs.startup.as_ref()),
        };
    }

    if !healthy {
        return UnifiedStatus {
            state: BackendState::Degraded,
            label: "Backend Degraded".to_string(),
        };
    }

    UnifiedStatus {
        state: BackendState::Starting,
        label: starting_label(inputs.startup.as_ref()),
    }
}

/// Startup progress, if it is still meaningful. A completed startup
/// carries no percentage (the other signals decide whether we are online).
fn in_progress(startup: Option<&StartupStatus>) -> Option<&StartupStatus> {
    startup.filter(|s| !s.is_complete)
}

fn offline_label(startup: Option<&StartupStatus>) -> String {
    match in_progress(startup) {
        Some(s) => match s.current_step_name.as_deref() {
            Some(step) => format!("Waiting for {} ({}%)", step, s.percent()),
            None => format!("Backend Offline ({}%)", s.percent()),
        },
        None => "Backend Offline".to_string(),
    }
}

fn starting_label(startup: Option<&StartupStatus>) -> String {
    match in_progress(startup) {
        Some(s) => match s.current_step_name.as_deref() {
            Some(step) => format!("Starting: {} ({}%)", step, s.percent()),
            None => format!("Starting ({}%)", s.percent()),
        },
        None => "Starting".to_string(),
    }
}
