// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the FeedbackStatsWidget.
//
// Verifies the loading indicator, the review banner for both the pending
// and all-reviewed cases, the fixed connection-error message, and that a
// slow response cannot overwrite a later one.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use pokerhud_client::CONNECT_FAILURE_MESSAGE;
use support::{cleanup, click, feedback, http_error, render_with_api, MockStatsApi};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use pokerhud_ui::components::feedback_stats::FeedbackStatsWidget;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn shows_loading_indicator_while_request_is_in_flight() {
    // Empty script: the request never resolves.
    let api = MockStatsApi::new().into_handle();
    let mount = render_with_api(api, html! { <FeedbackStatsWidget /> });
    sleep(Duration::from_millis(50)).await;

    let text = mount.text_content().unwrap_or_default();
    assert!(
        text.contains("Loading feedback stats"),
        "expected loading indicator, got: {text}"
    );
    assert!(mount.query_selector(".loading-indicator").unwrap().is_some());

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn renders_pending_banner_then_all_reviewed_after_refresh() {
    let api = MockStatsApi::new()
        .push_feedback(0, Ok(feedback(3)))
        .push_feedback(0, Ok(feedback(0)))
        .into_handle();
    let mount = render_with_api(api, html! { <FeedbackStatsWidget /> });
    sleep(Duration::from_millis(50)).await;

    let text = mount.text_content().unwrap_or_default();
    assert!(
        text.contains("3 events awaiting expert review"),
        "expected pending banner, got: {text}"
    );
    assert!(mount.query_selector(".banner-info").unwrap().is_some());

    click(&mount, ".refresh-btn");
    sleep(Duration::from_millis(50)).await;

    let text = mount.text_content().unwrap_or_default();
    assert!(
        text.contains("All events reviewed"),
        "expected all-reviewed banner, got: {text}"
    );
    assert!(mount.query_selector(".banner-success").unwrap().is_some());

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn request_failure_shows_fixed_message_and_retry() {
    let api = MockStatsApi::new()
        .push_feedback(0, Err(http_error()))
        .into_handle();
    let mount = render_with_api(api, html! { <FeedbackStatsWidget /> });
    sleep(Duration::from_millis(50)).await;

    let text = mount.text_content().unwrap_or_default();
    assert!(
        text.contains(CONNECT_FAILURE_MESSAGE),
        "expected the fixed failure message, got: {text}"
    );
    // The raw status code must never reach the DOM.
    assert!(!text.contains("503"));
    assert!(mount.query_selector(".retry-btn").unwrap().is_some());

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn retry_after_failure_recovers() {
    let api = MockStatsApi::new()
        .push_feedback(0, Err(http_error()))
        .push_feedback(0, Ok(feedback(1)))
        .into_handle();
    let mount = render_with_api(api, html! { <FeedbackStatsWidget /> });
    sleep(Duration::from_millis(50)).await;

    assert!(mount.query_selector(".widget-error").unwrap().is_some());

    click(&mount, ".retry-btn");
    sleep(Duration::from_millis(50)).await;

    let text = mount.text_content().unwrap_or_default();
    assert!(
        text.contains("1 events awaiting expert review"),
        "expected stats after retry, got: {text}"
    );
    assert!(mount.query_selector(".widget-error").unwrap().is_none());

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn last_resolved_response_determines_displayed_state() {
    // Overlapping fetches are not deduplicated. The first refresh is slow,
    // the second resolves immediately; the slow one lands last and is what
    // stays on screen.
    let api = MockStatsApi::new()
        .push_feedback(0, Ok(feedback(5)))
        .push_feedback(200, Ok(feedback(4)))
        .push_feedback(0, Ok(feedback(2)))
        .into_handle();
    let mount = render_with_api(api, html! { <FeedbackStatsWidget /> });
    sleep(Duration::from_millis(50)).await;

    click(&mount, ".refresh-btn");
    sleep(Duration::from_millis(20)).await;
    click(&mount, ".refresh-btn");
    sleep(Duration::from_millis(50)).await;

    // The quick second refresh has resolved, the slow first one has not.
    let text = mount.text_content().unwrap_or_default();
    assert!(
        text.contains("2 events awaiting expert review"),
        "expected the quick response first, got: {text}"
    );

    sleep(Duration::from_millis(300)).await;
    let text = mount.text_content().unwrap_or_default();
    assert!(
        text.contains("4 events awaiting expert review"),
        "expected the slow response to win, got: {text}"
    );

    cleanup(&mount);
}
