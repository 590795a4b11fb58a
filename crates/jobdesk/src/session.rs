// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Login/logout on top of [`ApiClient`].

use std::sync::Arc;

use serde::Serialize;

use crate::api::ApiResponse;
use crate::client::{ApiClient, ApiRequest};
use crate::credential::refresh::TokenResponse;
use crate::credential::{clear_pair, replace_pair, CredentialPair, LogoutReason, SessionEvent};
use crate::error::ApiError;
use crate::types::User;

pub const ME_PATH: &str = "/api/auth/me";

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// The signed-in administrator's session.
#[derive(Clone)]
pub struct Session {
    client: Arc<ApiClient>,
}

impl Session {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    /// Exchange credentials for a token pair and persist it.
    ///
    /// A rejected login never triggers a refresh; the 401 is returned as
    /// [`ApiError::Http`].
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let req = ApiRequest::post(self.client.login_path())
            .json_from(&LoginRequest { email, password })?;
        let envelope: ApiResponse<Option<TokenResponse>> = self.client.send_envelope(&req).await?;
        let pair: CredentialPair = envelope
            .data
            .filter(|t| !t.access_token.is_empty())
            .ok_or_else(|| ApiError::Rejected { message: "login returned no access token".into() })?
            .into();

        // Drops any refresh token left over from a previous account.
        replace_pair(self.client.store().as_ref(), &pair).map_err(ApiError::Storage)?;

        tracing::info!("logged in");
        self.client.emit(SessionEvent::LoggedIn);
        Ok(())
    }

    /// Forget both tokens. Safe to call when already logged out.
    pub fn logout(&self) -> Result<(), ApiError> {
        clear_pair(self.client.store().as_ref()).map_err(ApiError::Storage)?;
        tracing::info!("logged out");
        self.client.emit(SessionEvent::LoggedOut { reason: LogoutReason::UserRequested });
        Ok(())
    }

    pub fn is_authenticated(&self) -> Result<bool, ApiError> {
        Ok(self.client.access_token()?.is_some())
    }

    /// Profile of the signed-in account.
    pub async fn me(&self) -> Result<User, ApiError> {
        let envelope: ApiResponse<User> =
            self.client.send_envelope(&ApiRequest::get(ME_PATH)).await?;
        Ok(envelope.data)
    }
}
