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

//! Cross-platform client for the pokerhud backend.
//!
//! Works on WASM (browser), desktop, and mobile targets via [`reqwest`].
//! Besides the typed REST client this crate carries the pure view-controller
//! logic the frontend widgets are built on: the fetch lifecycle state
//! machine, the debounce primitive, the unified-status derivation, and the
//! startup-channel transition function. All of it is testable natively,
//! without a browser.
//!
//! # Example
//!
//! ```no_run
//! use pokerhud_client::BackendApiClient;
//!
//! # async fn example() -> Result<(), pokerhud_client::ApiError> {
//! let client = BackendApiClient::new("http://localhost:8000");
//! let health = client.get_health().await?;
//! println!("backend reports: {}", health.data.status);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod debounce;
pub mod error;
pub mod fetch;
pub mod rest;
pub mod startup;
pub mod status;

pub use api::{ApiHandle, StatsApi};
pub use debounce::Debounced;
pub use error::{ApiError, CONNECT_FAILURE_MESSAGE};
pub use fetch::{FetchController, FetchState, SuccessFalsePolicy};
pub use rest::BackendApiClient;
pub use startup::{on_channel_event, on_socket_settled, ChannelDirective, ChannelEvent};
pub use status::{unified_status, BackendState, StatusInputs, UnifiedStatus};
pub use pokerhud_types;
