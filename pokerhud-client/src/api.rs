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

//! Injection seam between widgets and the transport.
//!
//! Widgets fetch through [`StatsApi`] rather than a concrete HTTP client,
//! so component tests can supply a mock without any global mutable
//! transport state. [`ApiHandle`] is the cloneable, `PartialEq` wrapper
//! that can travel through Yew props and context.

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use pokerhud_types::{
    AccuracyStats, ApiResponse, FeedbackStats, HealthResponse, OpponentModelStats, StartupStatus,
};

use crate::error::ApiError;
use crate::rest::BackendApiClient;

/// The five read-only operations the dashboard widgets perform.
pub trait StatsApi {
    fn feedback_stats(&self)
        -> LocalBoxFuture<'static, Result<ApiResponse<FeedbackStats>, ApiError>>;
    fn opponent_stats(
        &self,
    ) -> LocalBoxFuture<'static, Result<ApiResponse<OpponentModelStats>, ApiError>>;
    fn accuracy_stats(
        &self,
    ) -> LocalBoxFuture<'static, Result<ApiResponse<AccuracyStats>, ApiError>>;
    fn health(&self) -> LocalBoxFuture<'static, Result<ApiResponse<HealthResponse>, ApiError>>;
    fn startup_status(
        &self,
    ) -> LocalBoxFuture<'static, Result<ApiResponse<StartupStatus>, ApiError>>;
}

/// [`StatsApi`] implemented over the real HTTP client.
#[derive(Debug, Clone)]
pub struct HttpStatsApi {
    client: BackendApiClient,
}

impl HttpStatsApi {
    pub fn new(client: BackendApiClient) -> Self {
        Self { client }
    }
}

impl StatsApi for HttpStatsApi {
    fn feedback_stats(
        &self,
    ) -> LocalBoxFuture<'static, Result<ApiResponse<FeedbackStats>, ApiError>> {
        let client = self.client.clone();
        Box::pin(async move { client.get_feedback_stats().await })
    }

    fn opponent_stats(
        &self,
    ) -> LocalBoxFuture<'static, Result<ApiResponse<OpponentModelStats>, ApiError>> {
        let client = self.client.clone();
        Box::pin(async move { client.get_opponent_stats().await })
    }

    fn accuracy_stats(
        &self,
    ) -> LocalBoxFuture<'static, Result<ApiResponse<AccuracyStats>, ApiError>> {
        let client = self.client.clone();
        Box::pin(async move { client.get_accuracy_stats().await })
    }

    fn health(&self) -> LocalBoxFuture<'static, Result<ApiResponse<HealthResponse>, ApiError>> {
        let client = self.client.clone();
        Box::pin(async move { client.get_health().await })
    }

    fn startup_status(
        &self,
    ) -> LocalBoxFuture<'static, Result<ApiResponse<StartupStatus>, ApiError>> {
        let client = self.client.clone();
        Box::pin(async move { client.get_startup_status().await })
    }
}

/// Shared handle to a [`StatsApi`] implementation.
///
/// Equality is pointer identity, so Yew props/context diffing stays cheap
/// and a re-provided identical handle does not re-render consumers.
#[derive(Clone)]
pub struct ApiHandle {
    inner: Rc<dyn StatsApi>,
}

impl ApiHandle {
    pub fn new(api: impl StatsApi + 'static) -> Self {
        Self {
            inner: Rc::new(api),
        }
    }

    /// Convenience constructor for the production HTTP-backed handle.
    pub fn http(base_url: &str) -> Self {
        Self::new(HttpStatsApi::new(BackendApiClient::new(base_url)))
    }

    pub fn api(&self) -> &dyn StatsApi {
        self.inner.as_ref()
    }
}

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for ApiHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiHandle")
    }
}
