// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session credentials: the access/refresh token pair, its durable storage,
//! and the events emitted when the session changes.

pub mod refresh;
pub mod store;

use serde::{Deserialize, Serialize};

pub use store::{CredentialStore, FileStore, MemoryStore};

/// Storage key for the bearer access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Access token plus the (optional) refresh token that renews it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialPair {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl std::fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialPair")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Read the stored pair. Returns `None` when no access token is stored.
pub fn load_pair(store: &dyn CredentialStore) -> anyhow::Result<Option<CredentialPair>> {
    let Some(access_token) = store.get(ACCESS_TOKEN_KEY)? else {
        return Ok(None);
    };
    let refresh_token = store.get(REFRESH_TOKEN_KEY)?;
    Ok(Some(CredentialPair { access_token, refresh_token }))
}

/// Persist a new pair in one write.
///
/// A pair without a refresh token keeps the previously stored one, matching
/// refresh endpoints that only rotate the access token.
pub fn store_pair(store: &dyn CredentialStore, pair: &CredentialPair) -> anyhow::Result<()> {
    match pair.refresh_token.as_deref() {
        Some(refresh) => store.set_many(&[
            (ACCESS_TOKEN_KEY, pair.access_token.as_str()),
            (REFRESH_TOKEN_KEY, refresh),
        ]),
        None => store.set(ACCESS_TOKEN_KEY, &pair.access_token),
    }
}

/// Replace the whole pair in one write.
///
/// Unlike [`store_pair`], a pair without a refresh token erases the stored one.
pub fn replace_pair(store: &dyn CredentialStore, pair: &CredentialPair) -> anyhow::Result<()> {
    match pair.refresh_token.as_deref() {
        Some(refresh) => store.set_many(&[
            (ACCESS_TOKEN_KEY, pair.access_token.as_str()),
            (REFRESH_TOKEN_KEY, refresh),
        ]),
        None => store.update(
            &[(ACCESS_TOKEN_KEY, pair.access_token.as_str())],
            &[REFRESH_TOKEN_KEY],
        ),
    }
}

/// Erase both tokens.
pub fn clear_pair(store: &dyn CredentialStore) -> anyhow::Result<()> {
    store.remove_many(&[ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY])
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogoutReason {
    /// The user asked to log out.
    UserRequested,
    /// No refresh token was stored when one was needed.
    MissingRefreshToken,
    /// The refresh endpoint rejected the refresh token or failed.
    RefreshFailed,
}

/// Events emitted on the session broadcast channel.
///
/// `LoggedOut` is the signal a UI shell uses to switch to its login view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    LoggedIn,
    TokenRefreshed,
    LoggedOut { reason: LogoutReason },
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
