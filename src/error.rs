// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for the session core and the API client.

/// Why the session store refused a token offered to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The token did not decode to the expected claims shape
    Malformed,
    /// The token decoded but its expiry is not in the future
    Expired,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::Malformed => write!(f, "malformed"),
            RejectReason::Expired => write!(f, "expired"),
        }
    }
}

/// Errors surfaced by session actions.
///
/// A rejected token leaves the session state exactly as it was; the error
/// exists so callers can react (re-prompt login) instead of silently
/// observing nothing changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("token rejected: {0}")]
    TokenRejected(RejectReason),
}

/// Errors from the REST API boundary.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Access denied")]
    Forbidden,

    #[error("Resource not found")]
    NotFound,

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Result type alias for API calls
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Errors from the high-level auth flows, which touch both the API and
/// the session store.
#[derive(Debug, thiserror::Error)]
pub enum AuthFlowError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Session(#[from] SessionError),
}
