// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for pokerhud-ui component tests.
//
// Provides mount/cleanup helpers, runtime-config injection, and a scripted
// StatsApi mock so that individual test files stay focused on assertions
// rather than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use futures::future::{self, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;
use pokerhud_client::{ApiError, ApiHandle, StatsApi};
use pokerhud_types::{
    AccuracyStats, ApiResponse, FeedbackStats, HealthResponse, OpponentModelStats, StartupStatus,
};
use wasm_bindgen::JsCast;
use yew::prelude::*;

use pokerhud_ui::context::ApiCtx;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Click the first element matching `selector` inside `mount`.
pub fn click(mount: &web_sys::Element, selector: &str) {
    let element = mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"));
    element.unchecked_into::<web_sys::HtmlElement>().click();
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

/// Inject a `window.__APP_CONFIG` object with all required fields. Call
/// this before rendering any component that reads the runtime config.
pub fn inject_app_config() {
    let config = js_sys::Object::new();
    let set = |key: &str, val: &wasm_bindgen::JsValue| {
        js_sys::Reflect::set(&config, &key.into(), val).unwrap();
    };
    set("apiBaseUrl", &"http://test:8000".into());
    set("wsUrl", &"ws://test:8000".into());

    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}

// ---------------------------------------------------------------------------
// Scripted StatsApi mock
// ---------------------------------------------------------------------------

type Scripted<T> = (u32, Result<ApiResponse<T>, ApiError>);

/// A [`StatsApi`] that answers each call from a per-endpoint script of
/// `(delay_ms, result)` entries, in order. An exhausted script never
/// resolves, which is how the loading-state tests hold a request open.
#[derive(Default)]
pub struct MockStatsApi {
    feedback: RefCell<VecDeque<Scripted<FeedbackStats>>>,
    opponents: RefCell<VecDeque<Scripted<OpponentModelStats>>>,
    accuracy: RefCell<VecDeque<Scripted<AccuracyStats>>>,
    health: RefCell<VecDeque<Scripted<HealthResponse>>>,
    startup: RefCell<VecDeque<Scripted<StartupStatus>>>,
}

impl MockStatsApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_feedback(
        self,
        delay_ms: u32,
        result: Result<ApiResponse<FeedbackStats>, ApiError>,
    ) -> Self {
        self.feedback.borrow_mut().push_back((delay_ms, result));
        self
    }

    pub fn push_opponents(
        self,
        delay_ms: u32,
        result: Result<ApiResponse<OpponentModelStats>, ApiError>,
    ) -> Self {
        self.opponents.borrow_mut().push_back((delay_ms, result));
        self
    }

    pub fn push_accuracy(
        self,
        delay_ms: u32,
        result: Result<ApiResponse<AccuracyStats>, ApiError>,
    ) -> Self {
        self.accuracy.borrow_mut().push_back((delay_ms, result));
        self
    }

    pub fn push_health(
        self,
        delay_ms: u32,
        result: Result<ApiResponse<HealthResponse>, ApiError>,
    ) -> Self {
        self.health.borrow_mut().push_back((delay_ms, result));
        self
    }

    pub fn push_startup(
        self,
        delay_ms: u32,
        result: Result<ApiResponse<StartupStatus>, ApiError>,
    ) -> Self {
        self.startup.borrow_mut().push_back((delay_ms, result));
        self
    }

    pub fn into_handle(self) -> ApiHandle {
        ApiHandle::new(self)
    }

    fn next<T: 'static>(
        queue: &RefCell<VecDeque<Scripted<T>>>,
    ) -> LocalBoxFuture<'static, Result<ApiResponse<T>, ApiError>> {
        match queue.borrow_mut().pop_front() {
            Some((0, result)) => Box::pin(future::ready(result)),
            Some((delay_ms, result)) => Box::pin(async move {
                TimeoutFuture::new(delay_ms).await;
                result
            }),
            None => Box::pin(future::pending()),
        }
    }
}

impl StatsApi for MockStatsApi {
    fn feedback_stats(
        &self,
    ) -> LocalBoxFuture<'static, Result<ApiResponse<FeedbackStats>, ApiError>> {
        Self::next(&self.feedback)
    }

    fn opponent_stats(
        &self,
    ) -> LocalBoxFuture<'static, Result<ApiResponse<OpponentModelStats>, ApiError>> {
        Self::next(&self.opponents)
    }

    fn accuracy_stats(
        &self,
    ) -> LocalBoxFuture<'static, Result<ApiResponse<AccuracyStats>, ApiError>> {
        Self::next(&self.accuracy)
    }

    fn health(&self) -> LocalBoxFuture<'static, Result<ApiResponse<HealthResponse>, ApiError>> {
        Self::next(&self.health)
    }

    fn startup_status(
        &self,
    ) -> LocalBoxFuture<'static, Result<ApiResponse<StartupStatus>, ApiError>> {
        Self::next(&self.startup)
    }
}

// ---------------------------------------------------------------------------
// Payload builders
// ---------------------------------------------------------------------------

pub fn feedback(pending: u64) -> ApiResponse<FeedbackStats> {
    ApiResponse::ok(FeedbackStats {
        pending_reviews: pending,
        reviewed_events: 10 - pending,
        total_events: 10,
        accuracy_after_review: None,
    })
}

pub fn opponents(tracked: u64, hands: u64) -> ApiResponse<OpponentModelStats> {
    ApiResponse::ok(OpponentModelStats {
        opponents_tracked: tracked,
        hands_observed: hands,
        exploit_score: None,
    })
}

pub fn healthy() -> ApiResponse<HealthResponse> {
    ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
    })
}

pub fn startup(done: u32, total: u32, step: &str) -> ApiResponse<StartupStatus> {
    ApiResponse::ok(StartupStatus {
        steps_completed: done,
        total_steps: total,
        current_step_name: Some(step.to_string()),
        is_complete: false,
    })
}

pub fn http_error() -> ApiError {
    ApiError::Http {
        status: 503,
        body: "service unavailable".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Context harness
// ---------------------------------------------------------------------------

#[derive(Properties, PartialEq)]
pub struct HarnessProps {
    pub api: ApiHandle,
    pub children: Children,
}

/// Wrap children in the `ApiCtx` provider, the way the app root does in
/// production. Tests swap in the scripted mock here.
#[function_component(ApiHarness)]
pub fn api_harness(props: &HarnessProps) -> Html {
    html! {
        <ContextProvider<ApiCtx> context={props.api.clone()}>
            { for props.children.iter() }
        </ContextProvider<ApiCtx>>
    }
}

/// Render `child` inside the harness at a fresh mount point.
pub fn render_with_api(api: ApiHandle, child: Html) -> web_sys::Element {
    let mount = create_mount_point();
    yew::Renderer::<ApiHarness>::with_root_and_props(
        mount.clone(),
        HarnessProps {
            api,
            children: Children::new(vec![child]),
        },
    )
    .render();
    mount
}
