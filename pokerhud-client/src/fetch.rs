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

//! Fetch lifecycle state machine for the periodic-fetch widgets.
//!
//! A widget owns one [`FetchController`] and drives it from its message
//! handler: `begin` on mount and on every interval tick, `begin_refresh`
//! when the user presses Refresh, `apply` when a response (any response)
//! arrives. The controller is deliberately transport-free so the whole
//! lifecycle is testable without a browser or a server.
//!
//! Overlapping fetches are not deduplicated: responses apply in arrival
//! order, so the last-resolved response wins regardless of which fetch
//! was triggered first.

use pokerhud_types::ApiResponse;

use crate::error::ApiError;

/// Message shown when the backend answers 2xx but flags the payload as
/// unsuccessful and the policy is [`SuccessFalsePolicy::SurfaceError`].
pub const BACKEND_REPORTED_FAILURE_MESSAGE: &str = "Backend reported an error.";

/// Display state of a periodic-fetch widget. Exactly one variant holds at
/// a time; `refreshing` can only be true while the widget is `Ready`.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Ready { data: T, refreshing: bool },
    Error(String),
}

/// What to do with a well-formed `{ success: false, .. }` payload.
///
/// The backend occasionally answers 2xx with `success: false`. Keeping the
/// last good value mirrors the long-observed widget behavior; surfacing an
/// error makes the condition visible instead of silently masking it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuccessFalsePolicy {
    /// Leave the prior display state untouched (clears `refreshing`).
    #[default]
    KeepLastGood,
    /// Transition to `Error` with a backend-failure message.
    SurfaceError,
}

/// Drives [`FetchState`] transitions for one widget.
#[derive(Debug)]
pub struct FetchController<T> {
    state: FetchState<T>,
    policy: SuccessFalsePolicy,
}

impl<T> Default for FetchController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FetchController<T> {
    pub fn new() -> Self {
        Self::with_policy(SuccessFalsePolicy::default())
    }

    pub fn with_policy(policy: SuccessFalsePolicy) -> Self {
        Self {
            state: FetchState::Loading,
            policy,
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// An automatic fetch is starting (mount or interval tick).
    ///
    /// A widget that is already showing data keeps showing it while the
    /// background fetch runs; anything else drops back to the loading
    /// indicator.
    pub fn begin(&mut self) {
        if !matches!(self.state, FetchState::Ready { .. }) {
            self.state = FetchState::Loading;
        }
    }

    /// A manual refresh is starting.
    ///
    /// Marks the current data as `refreshing`; without data to keep on
    /// screen this behaves like [`begin`](Self::begin).
    pub fn begin_refresh(&mut self) {
        match &mut self.state {
            FetchState::Ready { refreshing, .. } => *refreshing = true,
            _ => self.state = FetchState::Loading,
        }
    }

    /// A response resolved. Applies it in arrival order (last write wins).
    ///
    /// Any transport failure surfaces the normalized user-facing message,
    /// even when it was a manual refresh that failed.
    pub fn apply(&mut self, result: Result<ApiResponse<T>, ApiError>) {
        match result {
            Err(e) => {
                self.state = FetchState::Error(e.user_message());
            }
            Ok(envelope) if envelope.success => {
                self.state = FetchState::Ready {
                    data: envelope.data,
                    refreshing: false,
                };
            }
            Ok(_) => match self.policy {
                SuccessFalsePolicy::KeepLastGood => {
                    if let FetchState::Ready { refreshing, .. } = &mut self.state {
                        *refreshing = false;
                    }
                }
                SuccessFalsePolicy::SurfaceError => {
                    self.state = FetchState::Error(BACKEND_REPORTED_FAILURE_MESSAGE.to_string());
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CONNECT_FAILURE_MESSAGE;
    use pokerhud_types::FeedbackStats;

    fn stats(pending: u64) -> FeedbackStats {
        FeedbackStats {
            pending_reviews: pending,
            reviewed_events: 10 - pending,
            total_events: 10,
            accuracy_after_review: None,
        }
    }

    fn http_error() -> ApiError {
        ApiError::Http {
            status: 500,
            body: "boom".to_string(),
        }
    }

    #[test]
    fn starts_loading() {
        let controller: FetchController<FeedbackStats> = FetchController::new();
        assert_eq!(*controller.state(), FetchState::Loading);
    }

    #[test]
    fn success_replaces_data_wholesale() {
        let mut controller = FetchController::new();
        controller.begin();
        controller.apply(Ok(ApiResponse::ok(stats(3))));
        assert_eq!(
            *controller.state(),
            FetchState::Ready {
                data: stats(3),
                refreshing: false
            }
        );
        // Idempotence: the same response leaves the state unchanged.
        controller.apply(Ok(ApiResponse::ok(stats(3))));
        assert_eq!(
            *controller.state(),
            FetchState::Ready {
                data: stats(3),
                refreshing: false
            }
        );
    }

    #[test]
    fn failure_surfaces_fixed_message_not_stale_data() {
        let mut controller = FetchController::new();
        controller.apply(Ok(ApiResponse::ok(stats(3))));
        controller.begin();
        controller.apply(Err(http_error()));
        assert_eq!(
            *controller.state(),
            FetchState::Error(CONNECT_FAILURE_MESSAGE.to_string())
        );
    }

    #[test]
    fn manual_refresh_failure_still_reports_error() {
        let mut controller = FetchController::new();
        controller.apply(Ok(ApiResponse::ok(stats(1))));
        controller.begin_refresh();
        assert!(matches!(
            controller.state(),
            FetchState::Ready {
                refreshing: true,
                ..
            }
        ));
        controller.apply(Err(http_error()));
        assert!(matches!(controller.state(), FetchState::Error(_)));
    }

    #[test]
    fn interval_fetch_keeps_showing_data_while_in_flight() {
        let mut controller = FetchController::new();
        controller.apply(Ok(ApiResponse::ok(stats(2))));
        controller.begin();
        assert_eq!(
            *controller.state(),
            FetchState::Ready {
                data: stats(2),
                refreshing: false
            }
        );
    }

    #[test]
    fn last_resolved_response_wins() {
        let mut controller = FetchController::new();
        // Interval fetch and manual refresh overlap; the refresh response
        // (stats(0)) arrives first, the older interval response (stats(3))
        // resolves last and determines the final state.
        controller.begin();
        controller.begin_refresh();
        controller.apply(Ok(ApiResponse::ok(stats(0))));
        controller.apply(Ok(ApiResponse::ok(stats(3))));
        assert_eq!(
            *controller.state(),
            FetchState::Ready {
                data: stats(3),
                refreshing: false
            }
        );
    }

    #[test]
    fn success_false_keeps_last_good_by_default() {
        let mut controller = FetchController::new();
        controller.apply(Ok(ApiResponse::ok(stats(4))));
        controller.begin_refresh();
        controller.apply(Ok(ApiResponse::failed(stats(0))));
        // Prior data untouched, refreshing cleared.
        assert_eq!(
            *controller.state(),
            FetchState::Ready {
                data: stats(4),
                refreshing: false
            }
        );
    }

    #[test]
    fn success_false_while_loading_keeps_loading() {
        let mut controller: FetchController<FeedbackStats> = FetchController::new();
        controller.begin();
        controller.apply(Ok(ApiResponse::failed(stats(0))));
        assert_eq!(*controller.state(), FetchState::Loading);
    }

    #[test]
    fn success_false_surfaces_error_when_configured() {
        let mut controller = FetchController::with_policy(SuccessFalsePolicy::SurfaceError);
        controller.apply(Ok(ApiResponse::ok(stats(4))));
        controller.apply(Ok(ApiResponse::failed(stats(0))));
        assert_eq!(
            *controller.state(),
            FetchState::Error(BACKEND_REPORTED_FAILURE_MESSAGE.to_string())
        );
    }
}
