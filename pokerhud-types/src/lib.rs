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

//! Shared API types for the pokerhud assistance backend.
//!
//! This crate defines the API contract between the backend and its
//! consumers (the Yew frontend, the REST client, integration tests).
//! It is intentionally framework-agnostic: no HTTP framework, no
//! browser types.

pub mod responses;
pub mod startup;

pub use responses::{AccuracyStats, ApiResponse, FeedbackStats, HealthResponse, OpponentModelStats};
pub use startup::{SocketMessage, StartupStatus, STARTUP_UPDATE_TYPE};
