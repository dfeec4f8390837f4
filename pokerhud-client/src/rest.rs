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

//! Typed REST client for the pokerhud backend.
//!
//! All methods return the full [`ApiResponse`] envelope; the
//! `success: false` policy is applied by the fetch controller, not here.

use pokerhud_types::{
    AccuracyStats, ApiResponse, FeedbackStats, HealthResponse, OpponentModelStats, StartupStatus,
};
use reqwest::Client;

use crate::error::ApiError;

/// A typed REST client for the pokerhud backend.
#[derive(Debug, Clone)]
pub struct BackendApiClient {
    base_url: String,
    http: Client,
}

impl BackendApiClient {
    /// Create a new client pointing at the given backend base URL,
    /// e.g. `"http://localhost:8000"`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Expert-review queue stats.
    ///
    /// Calls `GET /api/feedback/stats`.
    pub async fn get_feedback_stats(&self) -> Result<ApiResponse<FeedbackStats>, ApiError> {
        let response = self.http.get(self.url("/api/feedback/stats")).send().await?;
        parse_envelope(response).await
    }

    /// Opponent-modeling stats.
    ///
    /// Calls `GET /api/opponents/stats`.
    pub async fn get_opponent_stats(&self) -> Result<ApiResponse<OpponentModelStats>, ApiError> {
        let response = self
            .http
            .get(self.url("/api/opponents/stats"))
            .send()
            .await?;
        parse_envelope(response).await
    }

    /// Decision-accuracy stats.
    ///
    /// Calls `GET /api/accuracy/stats`.
    pub async fn get_accuracy_stats(&self) -> Result<ApiResponse<AccuracyStats>, ApiError> {
        let response = self
            .http
            .get(self.url("/api/accuracy/stats"))
            .send()
            .await?;
        parse_envelope(response).await
    }

    /// Backend health check.
    ///
    /// Calls `GET /api/health`. Doubles as the API reachability probe.
    pub async fn get_health(&self) -> Result<ApiResponse<HealthResponse>, ApiError> {
        let response = self.http.get(self.url("/api/health")).send().await?;
        parse_envelope(response).await
    }

    /// Startup progress, over plain HTTP.
    ///
    /// Calls `GET /api/startup-status`. Used as the poll fallback while the
    /// startup WebSocket channel is down.
    pub async fn get_startup_status(&self) -> Result<ApiResponse<StartupStatus>, ApiError> {
        let response = self
            .http
            .get(self.url("/api/startup-status"))
            .send()
            .await?;
        parse_envelope(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Parse a standard `ApiResponse<T>` body, mapping non-2xx statuses to
/// [`ApiError::Http`].
async fn parse_envelope<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<ApiResponse<T>, ApiError> {
    let status = response.status().as_u16();
    if !(200..300).contains(&status) {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Http { status, body });
    }
    Ok(response.json().await?)
}
