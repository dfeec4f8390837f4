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

//! Error types for the backend client.

use thiserror::Error;

/// The one user-facing message shown for any transport-level failure.
/// Widgets never surface raw error text to the user.
pub const CONNECT_FAILURE_MESSAGE: &str = "Failed to connect to backend. Is the server running?";

/// Errors returned by [`BackendApiClient`](crate::BackendApiClient) methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A network or transport error (fetch threw, connection refused,
    /// body failed to parse).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("Server error ({status}): {body}")]
    Http { status: u16, body: String },

    /// A configuration error (e.g. missing base URL).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Normalize the error to the message widgets display.
    ///
    /// Network and HTTP failures collapse to the same fixed string;
    /// configuration errors are developer-facing and keep their detail.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) | ApiError::Http { .. } => CONNECT_FAILURE_MESSAGE.to_string(),
            ApiError::Config(msg) => format!("Configuration error: {msg}"),
        }
    }
}
