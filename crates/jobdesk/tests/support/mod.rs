// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process mock of the marketplace backend.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use jobdesk::credential::{store_pair, CredentialPair};
use jobdesk::{ApiClient, ClientConfig, CredentialStore, MemoryStore};

pub const EMAIL: &str = "admin@example.com";
pub const PASSWORD: &str = "secret";

/// One request as seen by the backend.
#[derive(Debug, Clone)]
pub struct Hit {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl Hit {
    pub fn bearer(&self) -> Option<&str> {
        self.authorization.as_deref().and_then(|a| a.strip_prefix("Bearer "))
    }

    pub fn json(&self) -> anyhow::Result<Value> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

pub struct Backend {
    access: Mutex<String>,
    refresh: Mutex<String>,
    generation: AtomicU32,
    refresh_calls: AtomicU32,
    refresh_delay: Mutex<Duration>,
    refresh_status: Mutex<Option<u16>>,
    rotate_refresh: AtomicBool,
    deny: Mutex<HashSet<String>>,
    slow: Mutex<HashMap<String, Duration>>,
    responses: Mutex<HashMap<String, (u16, Value)>>,
    hits: Mutex<Vec<Hit>>,
}

impl Backend {
    fn new() -> Self {
        Self {
            access: Mutex::new("access-0".to_owned()),
            refresh: Mutex::new("refresh-0".to_owned()),
            generation: AtomicU32::new(0),
            refresh_calls: AtomicU32::new(0),
            refresh_delay: Mutex::new(Duration::ZERO),
            refresh_status: Mutex::new(None),
            rotate_refresh: AtomicBool::new(false),
            deny: Mutex::new(HashSet::new()),
            slow: Mutex::new(HashMap::new()),
            responses: Mutex::new(HashMap::new()),
            hits: Mutex::new(Vec::new()),
        }
    }

    fn record(&self, method: &Method, uri: &Uri, headers: &HeaderMap, body: Bytes) {
        let header_str = |name: header::HeaderName| {
            headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned)
        };
        self.hits.lock().push(Hit {
            method: method.to_string(),
            path: uri.path().to_owned(),
            query: uri.query().map(str::to_owned),
            authorization: header_str(header::AUTHORIZATION),
            content_type: header_str(header::CONTENT_TYPE),
            body,
        });
    }

    fn authorized(&self, headers: &HeaderMap) -> bool {
        let expected = format!("Bearer {}", self.access.lock());
        headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) == Some(expected.as_str())
    }
}

fn envelope(status: StatusCode, success: bool, message: &str, data: Value) -> Response {
    (status, Json(json!({ "success": success, "message": message, "data": data }))).into_response()
}

fn unauthorized() -> Response {
    envelope(StatusCode::UNAUTHORIZED, false, "unauthorized", Value::Null)
}

async fn login(
    State(backend): State<Arc<Backend>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    backend.record(&method, &uri, &headers, body.clone());
    let creds: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    if creds["email"] != EMAIL || creds["password"] != PASSWORD {
        return envelope(StatusCode::UNAUTHORIZED, false, "invalid credentials", Value::Null);
    }
    let data = json!({
        "accessToken": backend.access.lock().clone(),
        "refreshToken": backend.refresh.lock().clone(),
    });
    envelope(StatusCode::OK, true, "", data)
}

async fn refresh(
    State(backend): State<Arc<Backend>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    backend.record(&method, &uri, &headers, body.clone());
    backend.refresh_calls.fetch_add(1, Ordering::SeqCst);

    let delay = *backend.refresh_delay.lock();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    if let Some(status) = *backend.refresh_status.lock() {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return envelope(status, false, "refresh denied", Value::Null);
    }

    let presented: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    if presented["refreshToken"] != *backend.refresh.lock() {
        return envelope(StatusCode::UNAUTHORIZED, false, "invalid refresh token", Value::Null);
    }

    let generation = backend.generation.fetch_add(1, Ordering::SeqCst) + 1;
    let access = format!("access-{generation}");
    *backend.access.lock() = access.clone();
    let mut data = json!({ "accessToken": access });
    if backend.rotate_refresh.load(Ordering::SeqCst) {
        let rotated = format!("refresh-{generation}");
        *backend.refresh.lock() = rotated.clone();
        data["refreshToken"] = Value::String(rotated);
    }
    envelope(StatusCode::OK, true, "", data)
}

async fn resource(
    State(backend): State<Arc<Backend>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    backend.record(&method, &uri, &headers, body);
    let delay = backend.slow.lock().get(uri.path()).copied();
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    if backend.deny.lock().contains(uri.path()) || !backend.authorized(&headers) {
        return unauthorized();
    }
    let key = format!("{method} {}", uri.path());
    match backend.responses.lock().get(&key).cloned() {
        Some((status, body)) => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(body)).into_response()
        }
        None => envelope(StatusCode::OK, true, "", Value::Null),
    }
}

/// A running mock backend bound to an ephemeral port.
pub struct TestBackend {
    pub addr: SocketAddr,
    pub state: Arc<Backend>,
}

impl TestBackend {
    pub async fn start() -> anyhow::Result<Self> {
        let state = Arc::new(Backend::new());
        let app = Router::new()
            .route("/api/auth/login", post(login))
            .route("/api/auth/refresh", post(refresh))
            .fallback(resource)
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });
        Ok(Self { addr, state })
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::for_url(self.url())
    }

    pub fn client(&self, store: Arc<dyn CredentialStore>) -> anyhow::Result<Arc<ApiClient>> {
        Ok(Arc::new(ApiClient::new(&self.config(), store)?))
    }

    /// The access token the backend currently accepts.
    pub fn access_token(&self) -> String {
        self.state.access.lock().clone()
    }

    pub fn refresh_token(&self) -> String {
        self.state.refresh.lock().clone()
    }

    /// Revoke the current access token so the next request gets a 401.
    pub fn expire_access(&self) {
        *self.state.access.lock() = "revoked".to_owned();
    }

    pub fn refresh_calls(&self) -> u32 {
        self.state.refresh_calls.load(Ordering::SeqCst)
    }

    pub fn set_refresh_delay(&self, delay: Duration) {
        *self.state.refresh_delay.lock() = delay;
    }

    /// Make every refresh attempt fail with `status`.
    pub fn fail_refresh(&self, status: u16) {
        *self.state.refresh_status.lock() = Some(status);
    }

    pub fn restore_refresh(&self) {
        *self.state.refresh_status.lock() = None;
    }

    pub fn rotate_refresh_tokens(&self) {
        self.state.rotate_refresh.store(true, Ordering::SeqCst);
    }

    /// Answer 401 on `path` regardless of the token presented.
    pub fn deny(&self, path: &str) {
        self.state.deny.lock().insert(path.to_owned());
    }

    /// Hold requests on `path` for `delay` before checking their token.
    pub fn slow(&self, path: &str, delay: Duration) {
        self.state.slow.lock().insert(path.to_owned(), delay);
    }

    /// Canned response for `METHOD path` (authorized requests only).
    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        self.state.responses.lock().insert(format!("{method} {path}"), (status, body));
    }

    pub fn hits(&self) -> Vec<Hit> {
        self.state.hits.lock().clone()
    }

    pub fn hits_on(&self, path: &str) -> Vec<Hit> {
        self.hits().into_iter().filter(|h| h.path == path).collect()
    }
}

/// Store seeded with `access` and an optional refresh token.
pub fn seeded_store(access: &str, refresh: Option<&str>) -> anyhow::Result<Arc<MemoryStore>> {
    let store = Arc::new(MemoryStore::new());
    store_pair(
        store.as_ref(),
        &CredentialPair {
            access_token: access.to_owned(),
            refresh_token: refresh.map(str::to_owned),
        },
    )?;
    Ok(store)
}
