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

//! Runtime configuration and fixed polling periods.
//!
//! Configuration is read at runtime from a frozen `window.__APP_CONFIG`
//! object injected by the hosting page (and by the test harness), so the
//! same build works against any backend.

use pokerhud_client::ApiHandle;

/// How often the stat widgets re-fetch their payload.
pub const STATS_POLL_INTERVAL_MS: u32 = 30_000;
/// How often the nav bar probes the health endpoint.
pub const HEALTH_POLL_INTERVAL_MS: u32 = 5_000;

/// Values read from `window.__APP_CONFIG`.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    pub api_base_url: String,
    pub ws_url: String,
}

/// Read the runtime config. Errors are developer-facing; the app root
/// renders them instead of the dashboard.
pub fn app_config() -> Result<RuntimeConfig, String> {
    let window = gloo_utils::window();
    let config = js_sys::Reflect::get(window.as_ref(), &"__APP_CONFIG".into())
        .map_err(|_| "window.__APP_CONFIG is not set".to_string())?;
    if config.is_undefined() || config.is_null() {
        return Err("window.__APP_CONFIG is not set".to_string());
    }

    let get_string = |key: &str| -> Result<String, String> {
        js_sys::Reflect::get(&config, &key.into())
            .ok()
            .and_then(|v| v.as_string())
            .ok_or_else(|| format!("__APP_CONFIG.{key} is missing"))
    };

    Ok(RuntimeConfig {
        api_base_url: get_string("apiBaseUrl")?,
        ws_url: get_string("wsUrl")?,
    })
}

/// Production HTTP-backed API handle. Widgets call this only when no
/// handle was provided through context.
pub fn stats_api() -> Result<ApiHandle, String> {
    Ok(ApiHandle::http(&app_config()?.api_base_url))
}

/// URL of the startup-status WebSocket channel.
pub fn startup_ws_url() -> Result<String, String> {
    Ok(format!("{}/api/startup-status/ws", app_config()?.ws_url))
}
