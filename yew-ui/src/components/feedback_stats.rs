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

//! Expert-review queue widget.
//!
//! Fetches feedback stats on mount and every 30 seconds; the Refresh
//! button re-issues the same fetch with the `refreshing` hint. The banner
//! flips between "awaiting review" and "all reviewed" based on the pending
//! count.

use gloo_timers::callback::Interval;
use pokerhud_client::{ApiError, FetchController, FetchState};
use pokerhud_types::{ApiResponse, FeedbackStats};
use yew::prelude::*;

use crate::components::loading::LoadingIndicator;
use crate::constants::STATS_POLL_INTERVAL_MS;
use crate::context::resolve_api;

pub enum FeedbackStatsMsg {
    Fetch,
    Refresh,
    Fetched(Result<ApiResponse<FeedbackStats>, ApiError>),
}

pub struct FeedbackStatsWidget {
    controller: FetchController<FeedbackStats>,
    _poll: Interval,
}

impl Component for FeedbackStatsWidget {
    type Message = FeedbackStatsMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let poll = Interval::new(STATS_POLL_INTERVAL_MS, move || {
            link.send_message(FeedbackStatsMsg::Fetch);
        });
        ctx.link().send_message(FeedbackStatsMsg::Fetch);

        Self {
            controller: FetchController::new(),
            _poll: poll,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            FeedbackStatsMsg::Fetch => {
                self.controller.begin();
                spawn_fetch(ctx);
                true
            }
            FeedbackStatsMsg::Refresh => {
                self.controller.begin_refresh();
                spawn_fetch(ctx);
                true
            }
            FeedbackStatsMsg::Fetched(result) => {
                self.controller.apply(result);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = match self.controller.state() {
            FetchState::Loading => html! {
                <LoadingIndicator text="Loading feedback stats..." />
            },
            FetchState::Error(message) => html! {
                <div class="widget-error">
                    <span>{message}</span>
                    <button
                        class="retry-btn"
                        onclick={ctx.link().callback(|_| FeedbackStatsMsg::Fetch)}
                    >
                        {"Retry"}
                    </button>
                </div>
            },
            FetchState::Ready { data, refreshing } => html! {
                <>
                    { render_banner(data) }
                    <dl class="stats-grid">
                        <dt>{"Pending reviews"}</dt>
                        <dd>{data.pending_reviews}</dd>
                        <dt>{"Reviewed"}</dt>
                        <dd>{data.reviewed_events}</dd>
                        <dt>{"Total events"}</dt>
                        <dd>{data.total_events}</dd>
                        {
                            if let Some(accuracy) = data.accuracy_after_review {
                                html! {
                                    <>
                                        <dt>{"Accuracy after review"}</dt>
                                        <dd>{format!("{:.1}%", accuracy * 100.0)}</dd>
                                    </>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </dl>
                    {
                        if *refreshing {
                            html! { <span class="refresh-hint">{"Refreshing..."}</span> }
                        } else {
                            html! {}
                        }
                    }
                </>
            },
        };

        html! {
            <div class="stats-widget feedback-stats">
                <div class="widget-header">
                    <h3>{"Expert Review"}</h3>
                    {
                        if matches!(self.controller.state(), FetchState::Ready { .. }) {
                            html! {
                                <button
                                    class="refresh-btn"
                                    onclick={ctx.link().callback(|_| FeedbackStatsMsg::Refresh)}
                                >
                                    {"Refresh"}
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
                { body }
            </div>
        }
    }
}

fn render_banner(data: &FeedbackStats) -> Html {
    if data.pending_reviews > 0 {
        html! {
            <div class="banner banner-info">
                { format!("{} events awaiting expert review", data.pending_reviews) }
            </div>
        }
    } else {
        html! {
            <div class="banner banner-success">
                {"All events reviewed. Nice work."}
            </div>
        }
    }
}

fn spawn_fetch(ctx: &Context<FeedbackStatsWidget>) {
    let link = ctx.link().clone();
    match resolve_api(ctx) {
        Ok(api) => {
            let fut = api.api().feedback_stats();
            wasm_bindgen_futures::spawn_local(async move {
                link.send_message(FeedbackStatsMsg::Fetched(fut.await));
            });
        }
        Err(e) => link.send_message(FeedbackStatsMsg::Fetched(Err(ApiError::Config(e)))),
    }
}
