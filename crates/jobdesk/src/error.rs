// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};
use std::fmt;

/// Machine-readable classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    Network,
    Unauthorized,
    AuthenticationRequired,
    QueueFull,
    RefreshAbandoned,
    BadRequest,
    NotFound,
    Rejected,
    Upstream,
    Decode,
    Storage,
    Internal,
}

impl ErrorCode {
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Network => 503,
            Self::Unauthorized => 401,
            Self::AuthenticationRequired => 401,
            Self::QueueFull => 429,
            Self::RefreshAbandoned => 503,
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::Rejected => 422,
            Self::Upstream => 502,
            Self::Decode => 502,
            Self::Storage => 500,
            Self::Internal => 500,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "NETWORK",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::AuthenticationRequired => "AUTHENTICATION_REQUIRED",
            Self::QueueFull => "QUEUE_FULL",
            Self::RefreshAbandoned => "REFRESH_ABANDONED",
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::Rejected => "REJECTED",
            Self::Upstream => "UPSTREAM_ERROR",
            Self::Decode => "DECODE",
            Self::Storage => "STORAGE",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by [`crate::client::ApiClient`] and the typed endpoints.
#[derive(Debug)]
pub enum ApiError {
    /// Transport failure. Surfaced as-is; never retried.
    Network(reqwest::Error),
    /// Non-success status passed through unchanged.
    Http { status: u16, body: String },
    /// Token refresh failed; credentials were cleared and a logout was signalled.
    AuthenticationRequired { reason: String },
    /// Too many requests already waiting on the in-flight refresh.
    QueueFull,
    /// The refresh this request waited on was cancelled before it finished.
    /// Credentials are untouched; the request may be sent again.
    RefreshAbandoned,
    /// Response body did not match the expected shape.
    Decode(serde_json::Error),
    /// Backend envelope reported `success: false`.
    Rejected { message: String },
    /// Durable credential storage failed.
    Storage(anyhow::Error),
    /// The request descriptor could not be turned into an HTTP request.
    InvalidRequest(String),
}

impl ApiError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Network(_) => ErrorCode::Network,
            Self::Http { status, .. } => match status {
                401 | 403 => ErrorCode::Unauthorized,
                404 => ErrorCode::NotFound,
                400..=499 => ErrorCode::BadRequest,
                _ => ErrorCode::Upstream,
            },
            Self::AuthenticationRequired { .. } => ErrorCode::AuthenticationRequired,
            Self::QueueFull => ErrorCode::QueueFull,
            Self::RefreshAbandoned => ErrorCode::RefreshAbandoned,
            Self::Decode(_) => ErrorCode::Decode,
            Self::Rejected { .. } => ErrorCode::Rejected,
            Self::Storage(_) => ErrorCode::Storage,
            Self::InvalidRequest(_) => ErrorCode::Internal,
        }
    }

    /// HTTP status returned by the backend, if the error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_authentication_required(&self) -> bool {
        matches!(self, Self::AuthenticationRequired { .. })
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "network error: {e}"),
            Self::Http { status, body } if body.is_empty() => write!(f, "http {status}"),
            Self::Http { status, body } => write!(f, "http {status}: {body}"),
            Self::AuthenticationRequired { reason } => {
                write!(f, "authentication required: {reason}")
            }
            Self::QueueFull => f.write_str("too many requests waiting on token refresh"),
            Self::RefreshAbandoned => f.write_str("token refresh was abandoned before it settled"),
            Self::Decode(e) => write!(f, "invalid response body: {e}"),
            Self::Rejected { message } => write!(f, "rejected by backend: {message}"),
            Self::Storage(e) => write!(f, "credential storage: {e:#}"),
            Self::InvalidRequest(msg) => write!(f, "invalid request: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network(e) => Some(e),
            Self::Decode(e) => Some(e),
            Self::Storage(e) => Some(&**e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
