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

//! Application root: wires routing and provides the API handle.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::constants::stats_api;
use crate::context::ApiCtx;
use crate::pages::dashboard::Dashboard;
use crate::routing::Route;

fn switch(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <Dashboard /> },
        Route::NotFound => html! { <h1>{"404"}</h1> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    match stats_api() {
        Ok(api) => html! {
            <ContextProvider<ApiCtx> context={api}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<ApiCtx>>
        },
        Err(e) => html! {
            <div class="config-error">
                <h1>{"Configuration error"}</h1>
                <p>{e}</p>
            </div>
        },
    }
}
