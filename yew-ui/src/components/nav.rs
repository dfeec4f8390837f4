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

//! Navigation bar with the unified backend-status chip.
//!
//! Owns every liveness signal: the health poll (which doubles as the API
//! reachability probe), the startup WebSocket channel with its reconnect
//! backoff and HTTP poll fallback, and the two debounced signals that keep
//! transient blips from flickering through the chip. All timers and the
//! socket are plain struct fields, so destroying the component cancels
//! everything by dropping it; a response that resolves afterwards lands on
//! a dead link and is discarded by Yew.

use gloo_timers::callback::{Interval, Timeout};
use pokerhud_client::{
    on_channel_event, on_socket_settled, unified_status, ApiError, BackendState, ChannelDirective,
    ChannelEvent, Debounced, StatusInputs,
};
use pokerhud_client::status::{HEALTH_DEBOUNCE_MS, SOCKET_DEBOUNCE_MS};
use pokerhud_types::{ApiResponse, HealthResponse, StartupStatus};
use yew::prelude::*;
use yew_websocket::websocket::WebSocketTask;

use crate::constants::HEALTH_POLL_INTERVAL_MS;
use crate::context::resolve_api;
use crate::socket;

pub enum NavBarMsg {
    HealthTick,
    HealthFetched(Result<ApiResponse<HealthResponse>, ApiError>),
    Channel(ChannelEvent),
    SocketSettled(u64),
    HealthSettled(u64),
    Reconnect,
    PollTick,
    Polled(Result<ApiResponse<StartupStatus>, ApiError>),
}

pub struct NavBar {
    api_online: bool,
    socket_connected: Debounced<bool>,
    health_status: Debounced<String>,
    startup: Option<StartupStatus>,

    ws: Option<WebSocketTask>,
    _health_interval: Interval,
    poll_fallback: Option<Interval>,
    reconnect: Option<Timeout>,
    socket_settle: Option<Timeout>,
    health_settle: Option<Timeout>,
}

impl Component for NavBar {
    type Message = NavBarMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let health_interval = Interval::new(HEALTH_POLL_INTERVAL_MS, move || {
            link.send_message(NavBarMsg::HealthTick);
        });

        // Probe immediately and open the channel right away.
        ctx.link().send_message(NavBarMsg::HealthTick);
        ctx.link().send_message(NavBarMsg::Reconnect);

        Self {
            api_online: false,
            socket_connected: Debounced::new(false, SOCKET_DEBOUNCE_MS),
            health_status: Debounced::new(String::new(), HEALTH_DEBOUNCE_MS),
            startup: None,
            ws: None,
            _health_interval: health_interval,
            poll_fallback: None,
            reconnect: None,
            socket_settle: None,
            health_settle: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            NavBarMsg::HealthTick => {
                let link = ctx.link().clone();
                match resolve_api(ctx) {
                    Ok(api) => {
                        let fut = api.api().health();
                        wasm_bindgen_futures::spawn_local(async move {
                            link.send_message(NavBarMsg::HealthFetched(fut.await));
                        });
                    }
                    Err(e) => link.send_message(NavBarMsg::HealthFetched(Err(ApiError::Config(e)))),
                }
                false
            }
            NavBarMsg::HealthFetched(Ok(envelope)) => {
                self.api_online = true;
                if envelope.success {
                    self.set_health_raw(ctx, envelope.data.status);
                }
                true
            }
            NavBarMsg::HealthFetched(Err(e)) => {
                log::debug!("health probe failed: {e}");
                self.api_online = false;
                true
            }
            NavBarMsg::Channel(event) => {
                let backend_online = self.backend_online();
                for directive in on_channel_event(event, backend_online) {
                    self.run_directive(ctx, directive);
                }
                true
            }
            NavBarMsg::SocketSettled(generation) => {
                let changed = self.socket_connected.settle(generation);
                if changed {
                    // A close that lands while the stable signal still reads
                    // connected is gated out of re-arming at event time; the
                    // settle is when the disconnect becomes visible.
                    for directive in on_socket_settled(
                        *self.socket_connected.stable(),
                        self.ws.is_some(),
                        self.reconnect.is_some(),
                    ) {
                        self.run_directive(ctx, directive);
                    }
                }
                changed
            }
            NavBarMsg::HealthSettled(generation) => self.health_status.settle(generation),
            NavBarMsg::Reconnect => {
                self.reconnect = None;
                // Gated on backend state, not a retry counter.
                if !self.backend_online() {
                    self.connect_channel(ctx);
                }
                false
            }
            NavBarMsg::PollTick => {
                let link = ctx.link().clone();
                if let Ok(api) = resolve_api(ctx) {
                    let fut = api.api().startup_status();
                    wasm_bindgen_futures::spawn_local(async move {
                        link.send_message(NavBarMsg::Polled(fut.await));
                    });
                }
                false
            }
            NavBarMsg::Polled(Ok(envelope)) if envelope.success => {
                self.startup = Some(envelope.data);
                true
            }
            NavBarMsg::Polled(Ok(_)) => false,
            NavBarMsg::Polled(Err(e)) => {
                log::debug!("startup poll fallback failed: {e}");
                false
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let status = unified_status(&self.inputs());
        html! {
            <nav class="nav-bar">
                <span class="nav-title">{"pokerhud"}</span>
                <div class={classes!("status-chip", status.state.css_class())}>
                    <span class="status-dot"></span>
                    <span class="status-label">{ status.label }</span>
                </div>
            </nav>
        }
    }
}

impl NavBar {
    fn inputs(&self) -> StatusInputs {
        StatusInputs {
            api_online: self.api_online,
            socket_connected: *self.socket_connected.stable(),
            health_status: self.health_status.stable().clone(),
            startup: self.startup.clone(),
        }
    }

    fn backend_online(&self) -> bool {
        unified_status(&self.inputs()).state == BackendState::Ready
    }

    fn set_socket_raw(&mut self, ctx: &Context<Self>, connected: bool) {
        if let Some(generation) = self.socket_connected.set_raw(connected) {
            let link = ctx.link().clone();
            self.socket_settle = Some(Timeout::new(self.socket_connected.delay_ms(), move || {
                link.send_message(NavBarMsg::SocketSettled(generation));
            }));
        }
    }

    fn set_health_raw(&mut self, ctx: &Context<Self>, status: String) {
        if let Some(generation) = self.health_status.set_raw(status) {
            let link = ctx.link().clone();
            self.health_settle = Some(Timeout::new(self.health_status.delay_ms(), move || {
                link.send_message(NavBarMsg::HealthSettled(generation));
            }));
        }
    }

    fn connect_channel(&mut self, ctx: &Context<Self>) {
        let url = match crate::constants::startup_ws_url() {
            Ok(url) => url,
            Err(e) => {
                log::error!("startup channel misconfigured: {e}");
                return;
            }
        };
        match socket::connect(&url, ctx.link().callback(NavBarMsg::Channel)) {
            Ok(task) => self.ws = Some(task),
            Err(e) => {
                log::error!("startup channel connect failed: {e}");
                // Run the close transitions so the reconnect backoff and
                // poll fallback arm themselves.
                ctx.link()
                    .send_message(NavBarMsg::Channel(ChannelEvent::Closed));
            }
        }
    }

    fn run_directive(&mut self, ctx: &Context<Self>, directive: ChannelDirective) {
        match directive {
            ChannelDirective::SetConnected(connected) => {
                if connected {
                    self.reconnect = None;
                } else {
                    self.ws = None;
                }
                self.set_socket_raw(ctx, connected);
            }
            ChannelDirective::ApplyStartup(update) => {
                self.startup = Some(update);
            }
            ChannelDirective::ScheduleReconnect { after_ms } => {
                let link = ctx.link().clone();
                self.reconnect = Some(Timeout::new(after_ms, move || {
                    link.send_message(NavBarMsg::Reconnect);
                }));
            }
            ChannelDirective::StartPollFallback { every_ms } => {
                // Only while not already receiving live updates.
                if self.poll_fallback.is_none() {
                    let link = ctx.link().clone();
                    self.poll_fallback = Some(Interval::new(every_ms, move || {
                        link.send_message(NavBarMsg::PollTick);
                    }));
                }
            }
            ChannelDirective::StopPollFallback => {
                self.poll_fallback = None;
            }
        }
    }
}
