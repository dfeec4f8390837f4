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

//! Response types for the pokerhud backend REST API.
//!
//! Every endpoint returns an [`ApiResponse<T>`] envelope:
//! - On success: `{ "success": true,  "data": <T> }`
//! - On failure: `{ "success": false, "data": <T> }` (payload is left to the
//!   backend; clients decide how to treat a non-success envelope)

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Generic envelope
// ---------------------------------------------------------------------------

/// Top-level API response envelope.
///
/// All pokerhud backend endpoints wrap their payload in this structure so
/// that clients always see a consistent `{ "success", "data" }` shape.
///
/// # Example
///
/// ```json
/// { "success": true, "data": { "pending_reviews": 3, ... } }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Wrap a successful payload.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }

    /// Wrap a payload the backend flagged as unsuccessful.
    pub fn failed(data: T) -> Self {
        Self {
            success: false,
            data,
        }
    }
}

// ---------------------------------------------------------------------------
// Endpoint-specific payloads
// ---------------------------------------------------------------------------

/// Payload for `GET /api/feedback/stats`.
///
/// Tracks the expert-review queue for hands the engine flagged for human
/// feedback.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FeedbackStats {
    /// Events still waiting for an expert to review them.
    pub pending_reviews: u64,
    pub reviewed_events: u64,
    pub total_events: u64,
    /// Engine accuracy measured against expert verdicts, when enough
    /// reviews exist to compute one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy_after_review: Option<f64>,
}

/// Payload for `GET /api/opponents/stats`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OpponentModelStats {
    pub opponents_tracked: u64,
    pub hands_observed: u64,
    /// How exploitable the modeled population looks, 0.0..=1.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exploit_score: Option<f64>,
}

/// Payload for `GET /api/accuracy/stats`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AccuracyStats {
    pub decisions_scored: u64,
    /// Fraction of decisions where the user agreed with the engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agreement_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brier_score: Option<f64>,
}

/// Payload for `GET /api/health`.
///
/// `status` is `"healthy"` when every backend subsystem reports good; any
/// other string marks the backend degraded.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub const HEALTHY: &'static str = "healthy";

    pub fn is_healthy(&self) -> bool {
        self.status == Self::HEALTHY
    }
}
