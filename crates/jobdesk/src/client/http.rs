// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bearer-authenticated client with transparent access token recovery.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tokio::sync::broadcast;
use tracing::Instrument;

use crate::api::ApiResponse;
use crate::client::coordinator::{RefreshCoordinator, RefreshError, Ticket};
use crate::client::install_crypto_provider;
use crate::client::request::ApiRequest;
use crate::config::ClientConfig;
use crate::credential::refresh::do_refresh;
use crate::credential::{
    clear_pair, store_pair, CredentialStore, FileStore, LogoutReason, SessionEvent,
    ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY,
};
use crate::error::ApiError;

/// Why the leader could not obtain a new access token.
struct RefreshFailure {
    reason: String,
    cause: LogoutReason,
}

impl RefreshFailure {
    fn new(reason: impl Into<String>, cause: LogoutReason) -> Self {
        Self { reason: reason.into(), cause }
    }
}

/// HTTP client for the marketplace backend.
///
/// Every request carries the stored access token. A 401 on a non-auth
/// endpoint triggers at most one refresh per cycle, shared by all requests
/// that fail while it runs; each of them is then replayed exactly once.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    login_path: String,
    refresh_path: String,
    refresh_timeout: Duration,
    store: Arc<dyn CredentialStore>,
    refresh: RefreshCoordinator,
    events: broadcast::Sender<SessionEvent>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, store: Arc<dyn CredentialStore>) -> Result<Self, ApiError> {
        install_crypto_provider();
        let http = reqwest::Client::builder().timeout(config.request_timeout()).build()?;
        let (events, _) = broadcast::channel(64);
        Ok(Self {
            http,
            base_url: config.base_url().to_owned(),
            login_path: config.login_path.clone(),
            refresh_path: config.refresh_path.clone(),
            refresh_timeout: config.refresh_timeout(),
            store,
            refresh: RefreshCoordinator::new(config.max_queued_requests),
            events,
        })
    }

    /// Client backed by the credential file named in `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let store = FileStore::open(config.credentials_path()).map_err(ApiError::Storage)?;
        Self::new(config, Arc::new(store))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// Subscribe to session events (login, refresh, forced logout).
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub(crate) fn emit(&self, event: SessionEvent) {
        let _ = self.events.send(event);
    }

    /// Whether a token refresh is currently outstanding.
    pub fn refresh_in_flight(&self) -> bool {
        self.refresh.in_flight()
    }

    /// The access token that the next request would carry.
    pub fn access_token(&self) -> Result<Option<String>, ApiError> {
        let token = self.store.get(ACCESS_TOKEN_KEY).map_err(ApiError::Storage)?;
        Ok(token.filter(|t| !t.trim().is_empty()))
    }

    fn is_auth_endpoint(&self, req: &ApiRequest) -> bool {
        req.targets_any(&[self.login_path.as_str(), self.refresh_path.as_str()])
    }

    /// Send `req`, recovering once from an expired access token.
    ///
    /// Success responses are returned unchanged; any other status becomes
    /// [`ApiError::Http`]. Login and refresh endpoints, and replays, never
    /// enter the recovery path.
    pub async fn send(&self, req: &ApiRequest) -> Result<reqwest::Response, ApiError> {
        let span = tracing::debug_span!(
            "api",
            request_id = %uuid::Uuid::new_v4(),
            method = %req.method(),
            path = req.path(),
        );
        self.send_inner(req).instrument(span).await
    }

    async fn send_inner(&self, req: &ApiRequest) -> Result<reqwest::Response, ApiError> {
        let token = self.access_token()?;
        let cycle = self.refresh.cycle();
        let resp = self.dispatch(req, token.as_deref()).await?;
        if resp.status() != StatusCode::UNAUTHORIZED || self.is_auth_endpoint(req) {
            return check_status(resp).await;
        }

        tracing::debug!("authorization denied, recovering access token");
        let fresh = self.recover(token.as_deref(), cycle).await?;
        let replay = self.dispatch(req, Some(&fresh)).await?;
        tracing::debug!(status = replay.status().as_u16(), "replayed after refresh");
        check_status(replay).await
    }

    async fn dispatch(
        &self,
        req: &ApiRequest,
        bearer: Option<&str>,
    ) -> Result<reqwest::Response, ApiError> {
        let resp = req.build(&self.http, &self.base_url, bearer)?.send().await?;
        tracing::trace!(status = resp.status().as_u16(), "response");
        Ok(resp)
    }

    /// Obtain an access token newer than `stale`, joining or leading a refresh.
    ///
    /// `sent_in` is the refresh cycle current when the rejected request left.
    async fn recover(&self, stale: Option<&str>, sent_in: u64) -> Result<String, ApiError> {
        let lease = match self.refresh.acquire()? {
            Ticket::Wait(waiter) => {
                tracing::debug!("waiting on in-flight refresh");
                return waiter.wait().await.map_err(ApiError::from);
            }
            Ticket::Lead(lease) => lease,
        };

        // A refresh cycle may have completed after our request left; its
        // token is newer than the one that was rejected.
        let current = self.access_token()?;
        if let Some(current) = current.filter(|c| Some(c.as_str()) != stale) {
            lease.settle(&Ok(current.clone()));
            return Ok(current);
        }

        // That cycle failed instead: the session already ended and was
        // signalled once.
        if let Some(reason) = self.refresh.failed_since(sent_in) {
            let outcome = Err(RefreshError::Failed(reason.clone()));
            lease.settle(&outcome);
            tracing::debug!("session already ended by an earlier refresh failure");
            return Err(ApiError::AuthenticationRequired { reason });
        }

        match self.refresh_tokens().await {
            Ok(token) => {
                let waiters = lease.settle(&Ok(token.clone()));
                tracing::info!(waiters, "access token refreshed");
                self.emit(SessionEvent::TokenRefreshed);
                Ok(token)
            }
            Err(failure) => {
                if let Err(e) = clear_pair(self.store.as_ref()) {
                    tracing::warn!(err = %e, "failed to clear credentials after refresh failure");
                }
                let waiters = lease.settle(&Err(RefreshError::Failed(failure.reason.clone())));
                tracing::warn!(waiters, reason = %failure.reason, "token refresh failed, logging out");
                self.emit(SessionEvent::LoggedOut { reason: failure.cause });
                Err(ApiError::AuthenticationRequired { reason: failure.reason })
            }
        }
    }

    /// Exchange the stored refresh token and persist the new pair.
    async fn refresh_tokens(&self) -> Result<String, RefreshFailure> {
        let refresh_token = match self.store.get(REFRESH_TOKEN_KEY) {
            Ok(Some(t)) if !t.trim().is_empty() => t,
            Ok(_) => {
                return Err(RefreshFailure::new(
                    "no refresh token stored",
                    LogoutReason::MissingRefreshToken,
                ))
            }
            Err(e) => {
                return Err(RefreshFailure::new(
                    format!("credential storage: {e:#}"),
                    LogoutReason::RefreshFailed,
                ))
            }
        };

        let url = ApiRequest::post(self.refresh_path.as_str())
            .url(&self.base_url)
            .map_err(|e| RefreshFailure::new(e.to_string(), LogoutReason::RefreshFailed))?;
        let pair = do_refresh(&self.http, url.as_str(), &refresh_token, self.refresh_timeout)
            .await
            .map_err(|e| RefreshFailure::new(format!("{e:#}"), LogoutReason::RefreshFailed))?;

        store_pair(self.store.as_ref(), &pair).map_err(|e| {
            RefreshFailure::new(format!("credential storage: {e:#}"), LogoutReason::RefreshFailed)
        })?;
        Ok(pair.access_token)
    }

    /// Send `req` and decode the JSON body. An empty body decodes as `null`.
    pub async fn send_json<T: DeserializeOwned>(&self, req: &ApiRequest) -> Result<T, ApiError> {
        let resp = self.send(req).await?;
        let bytes = resp.bytes().await?;
        if bytes.is_empty() {
            return Ok(serde_json::from_value(serde_json::Value::Null)?);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Send `req` and decode the backend's `{success, message, data}` envelope.
    ///
    /// `success: false` becomes [`ApiError::Rejected`].
    pub async fn send_envelope<T: DeserializeOwned>(
        &self,
        req: &ApiRequest,
    ) -> Result<ApiResponse<T>, ApiError> {
        let envelope: ApiResponse<T> = self.send_json(req).await?;
        if !envelope.success {
            return Err(ApiError::Rejected { message: envelope.message });
        }
        Ok(envelope)
    }
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Http { status: status.as_u16(), body })
}
