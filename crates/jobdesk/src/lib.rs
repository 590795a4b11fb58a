// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client library for the job marketplace admin dashboard.
//!
//! [`ApiClient`] attaches the stored access token to every request. When the
//! backend answers 401, a single token refresh runs on behalf of every request
//! that failed meanwhile; each of them is then replayed once with the new
//! token. If the refresh fails, stored credentials are erased and
//! [`SessionEvent::LoggedOut`] is broadcast.

pub mod api;
pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod session;
pub mod types;

pub use api::{ApiResponse, Page, PageQuery};
pub use client::{ApiClient, ApiRequest};
pub use config::{init_tracing, ClientConfig};
pub use credential::{
    CredentialPair, CredentialStore, FileStore, LogoutReason, MemoryStore, SessionEvent,
};
pub use error::{ApiError, ErrorCode};
pub use session::Session;
