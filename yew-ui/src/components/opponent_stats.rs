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

//! Opponent-modeling widget. Same fetch lifecycle as the feedback widget,
//! with an empty state until any hands have been observed.

use gloo_timers::callback::Interval;
use pokerhud_client::{ApiError, FetchController, FetchState};
use pokerhud_types::{ApiResponse, OpponentModelStats};
use yew::prelude::*;

use crate::components::loading::{EmptyState, LoadingIndicator};
use crate::constants::STATS_POLL_INTERVAL_MS;
use crate::context::resolve_api;

pub enum OpponentModelMsg {
    Fetch,
    Refresh,
    Fetched(Result<ApiResponse<OpponentModelStats>, ApiError>),
}

pub struct OpponentModelWidget {
    controller: FetchController<OpponentModelStats>,
    _poll: Interval,
}

impl Component for OpponentModelWidget {
    type Message = OpponentModelMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let poll = Interval::new(STATS_POLL_INTERVAL_MS, move || {
            link.send_message(OpponentModelMsg::Fetch);
        });
        ctx.link().send_message(OpponentModelMsg::Fetch);

        Self {
            controller: FetchController::new(),
            _poll: poll,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            OpponentModelMsg::Fetch => {
                self.controller.begin();
                spawn_fetch(ctx);
                true
            }
            OpponentModelMsg::Refresh => {
                self.controller.begin_refresh();
                spawn_fetch(ctx);
                true
            }
            OpponentModelMsg::Fetched(result) => {
                self.controller.apply(result);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = match self.controller.state() {
            FetchState::Loading => html! {
                <LoadingIndicator text="Loading opponent models..." />
            },
            FetchState::Error(message) => html! {
                <div class="widget-error">
                    <span>{message}</span>
                    <button
                        class="retry-btn"
                        onclick={ctx.link().callback(|_| OpponentModelMsg::Fetch)}
                    >
                        {"Retry"}
                    </button>
                </div>
            },
            FetchState::Ready { data, refreshing } => {
                if data.hands_observed == 0 {
                    html! { <EmptyState message="No opponents modeled yet" /> }
                } else {
                    html! {
                        <>
                            <dl class="stats-grid">
                                <dt>{"Opponents tracked"}</dt>
                                <dd>{data.opponents_tracked}</dd>
                                <dt>{"Hands observed"}</dt>
                                <dd>{data.hands_observed}</dd>
                                {
                                    if let Some(score) = data.exploit_score {
                                        html! {
                                            <>
                                                <dt>{"Exploitability"}</dt>
                                                <dd>{format!("{:.2}", score)}</dd>
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
            <div class="stats-widget opponent-stats">
                <div class="widget-header">
                    <h3>{"Opponent Models"}</h3>
                    {
                        if matches!(self.controller.state(), FetchState::Ready { .. }) {
                            html! {
                                <button
                                    class="refresh-btn"
                                    onclick={ctx.link().callback(|_| OpponentModelMsg::Refresh)}
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

fn spawn_fetch(ctx: &Context<OpponentModelWidget>) {
    let link = ctx.link().clone();
    match resolve_api(ctx) {
        Ok(api) => {
            let fut = api.api().opponent_stats();
            wasm_bindgen_futures::spawn_local(async move {
                link.send_message(OpponentModelMsg::Fetched(fut.await));
            });
        }
        Err(e) => link.send_message(OpponentModelMsg::Fetched(Err(ApiError::Config(e)))),
    }
}
