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

//! Context providers for the application.
//!
//! The only shared state the dashboard needs is the [`ApiHandle`] the
//! widgets fetch through. The app root provides it once; tests provide a
//! mock instead. No global mutable transport anywhere.

use pokerhud_client::ApiHandle;
use yew::prelude::*;

/// Context type for the backend API handle.
pub type ApiCtx = ApiHandle;

/// Resolve the API handle for a struct component: context first (app root
/// or test harness), runtime config otherwise.
pub fn resolve_api<C: Component>(ctx: &Context<C>) -> Result<ApiHandle, String> {
    if let Some((api, _)) = ctx.link().context::<ApiCtx>(Callback::noop()) {
        return Ok(api);
    }
    crate::constants::stats_api()
}
