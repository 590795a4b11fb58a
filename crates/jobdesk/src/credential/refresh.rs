// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Access token renewal against the backend refresh endpoint.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::api::ApiResponse;
use crate::credential::CredentialPair;

/// Body of `POST <refresh_path>`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

/// Token payload returned by the login and refresh endpoints.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl From<TokenResponse> for CredentialPair {
    fn from(t: TokenResponse) -> Self {
        Self { access_token: t.access_token, refresh_token: t.refresh_token }
    }
}

/// Perform a single token refresh request, bounded by `timeout`.
///
/// No retries: a failed refresh ends the session.
pub async fn do_refresh(
    client: &reqwest::Client,
    refresh_url: &str,
    refresh_token: &str,
    timeout: Duration,
) -> anyhow::Result<CredentialPair> {
    let call = async {
        let resp = client
            .post(refresh_url)
            .json(&RefreshRequest { refresh_token })
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            anyhow::bail!("refresh failed ({status}): {text}");
        }

        let envelope: ApiResponse<Option<TokenResponse>> = resp.json().await?;
        if !envelope.success {
            anyhow::bail!("refresh rejected: {}", envelope.message);
        }
        let token = envelope.data.ok_or_else(|| anyhow::anyhow!("refresh response has no token"))?;
        if token.access_token.trim().is_empty() {
            anyhow::bail!("refresh response has an empty access token");
        }
        Ok::<_, anyhow::Error>(CredentialPair::from(token))
    };

    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => anyhow::bail!("refresh timed out after {}ms", timeout.as_millis()),
    }
}
