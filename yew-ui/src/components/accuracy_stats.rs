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

//! Decision-accuracy widget.

use gloo_timers::callback::Interval;
use pokerhud_client::{ApiError, FetchController, FetchState};
use pokerhud_types::{AccuracyStats, ApiResponse};
use yew::prelude::*;

use crate::components::loading::{EmptyState, LoadingIndicator};
use crate::constants::STATS_POLL_INTERVAL_MS;
use crate::context::resolve_api;

pub enum AccuracyMsg {
    Fetch,
    Refresh,
    Fetched(Result<ApiResponse<AccuracyStats>, ApiError>),
}

pub struct AccuracyWidget {
    controller: FetchController<AccuracyStats>,
    _poll: Interval,
}

impl Component for AccuracyWidget {
    type Message = AccuracyMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let poll = Interval::new(STATS_POLL_INTERVAL_MS, move || {
            link.send_message(AccuracyMsg::Fetch);
        });
        ctx.link().send_message(AccuracyMsg::Fetch);

        Self {
            controller: FetchController::new(),
            _poll: poll,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AccuracyMsg::Fetch => {
                self.controller.begin();
                spawn_fetch(ctx);
                true
            }
            AccuracyMsg::Refresh => {
                self.controller.begin_refresh();
                spawn_fetch(ctx);
                true
            }
            AccuracyMsg::Fetched(result) => {
                self.controller.apply(result);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = match self.controller.state() {
            FetchState::Loading => html! {
                <LoadingIndicator text="Loading accuracy stats..." />
            },
            FetchState::Error(message) => html! {
                <div class="widget-error">
                    <span>{message}</span>
                    <button
                        class="retry-btn"
                        onclick={ctx.link().callback(|_| AccuracyMsg::Fetch)}
                    >
                        {"Retry"}
                    </button>
                </div>
            },
            FetchState::Ready { data, refreshing } => {
                if data.decisions_scored == 0 {
                    html! { <EmptyState message="No decisions scored yet" /> }
                } else {
                    html! {
                        <>
                            <dl class="stats-grid">
                                <dt>{"Decisions scored"}</dt>
                                <dd>{data.decisions_scored}</dd>
                                {
                                    if let Some(rate) = data.agreement_rate {
                                        html! {
                                            <>
                                                <dt>{"Agreement rate"}</dt>
                                                <dd>{format!("{:.1}%", rate * 100.0)}</dd>
                                            </>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                                {
                                    if let Some(brier) = data.brier_score {
                                        html! {
                                            <>
                                                <dt>{"Brier score"}</dt>
                                                <dd>{format!("{:.3}", brier)}</dd>
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
                    }
                }
            }
        };

        html! {
            <div class="stats-widget accuracy-stats">
                <div class="widget-header">
                    <h3>{"Decision Accuracy"}</h3>
                    {
                        if matches!(self.controller.state(), FetchState::Ready { .. }) {
                            html! {
                                <button
                                    class="refresh-btn"
                                    onclick={ctx.link().callback(|_| AccuracyMsg::Refresh)}
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

fn spawn_fetch(ctx: &Context<AccuracyWidget>) {
    let link = ctx.link().clone();
    match resolve_api(ctx) {
        Ok(api) => {
            let fut = api.api().accuracy_stats();
            wasm_bindgen_futures::spawn_local(async move {
                link.send_message(AccuracyMsg::Fetched(fut.await));
            });
        }
        Err(e) => link.send_message(AccuracyMsg::Fetched(Err(ApiError::Config(e)))),
    }
}
