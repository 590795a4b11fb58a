// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

/// Configuration for the dashboard API client.
#[derive(Debug, Clone, clap::Args)]
pub struct ClientConfig {
    /// Base URL of the marketplace backend.
    #[arg(long, default_value = "http://localhost:4000", env = "JOBDESK_API_URL")]
    pub api_url: String,

    /// Path to the credential file. Defaults to `<state dir>/credentials.json`.
    #[arg(long, env = "JOBDESK_CREDENTIALS_FILE")]
    pub credentials_file: Option<PathBuf>,

    /// Transport timeout for every request in milliseconds.
    #[arg(long, default_value_t = 30000, env = "JOBDESK_REQUEST_TIMEOUT_MS")]
    pub request_timeout_ms: u64,

    /// Upper bound on a single token refresh call in milliseconds.
    #[arg(long, default_value_t = 15000, env = "JOBDESK_REFRESH_TIMEOUT_MS")]
    pub refresh_timeout_ms: u64,

    /// Max requests allowed to wait on an in-flight refresh.
    #[arg(long, default_value_t = 256, env = "JOBDESK_MAX_QUEUED_REQUESTS")]
    pub max_queued_requests: usize,

    /// Login endpoint. Never enters the refresh/retry path.
    #[arg(long, default_value = "/api/auth/login", env = "JOBDESK_LOGIN_PATH")]
    pub login_path: String,

    /// Token refresh endpoint. Never enters the refresh/retry path.
    #[arg(long, default_value = "/api/auth/refresh", env = "JOBDESK_REFRESH_PATH")]
    pub refresh_path: String,

    /// Log format (text or json).
    #[arg(long, default_value = "text", env = "JOBDESK_LOG_FORMAT")]
    pub log_format: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", env = "JOBDESK_LOG_LEVEL")]
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:4000".to_owned(),
            credentials_file: None,
            request_timeout_ms: 30000,
            refresh_timeout_ms: 15000,
            max_queued_requests: 256,
            login_path: "/api/auth/login".to_owned(),
            refresh_path: "/api/auth/refresh".to_owned(),
            log_format: "text".to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl ClientConfig {
    /// Config pointed at `api_url` with every other field at its default.
    pub fn for_url(api_url: impl Into<String>) -> Self {
        Self { api_url: api_url.into(), ..Self::default() }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn refresh_timeout(&self) -> Duration {
        Duration::from_millis(self.refresh_timeout_ms)
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    /// Resolved credential file location.
    pub fn credentials_path(&self) -> PathBuf {
        match self.credentials_file {
            Some(ref path) => path.clone(),
            None => state_dir().join("credentials.json"),
        }
    }
}

/// Resolve the state directory for client data.
///
/// Checks `JOBDESK_STATE_DIR`, then `$XDG_STATE_HOME/jobdesk`,
/// then `$HOME/.local/state/jobdesk`.
pub fn state_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("JOBDESK_STATE_DIR") {
        return PathBuf::from(dir);
    }
    if let Ok(xdg) = std::env::var("XDG_STATE_HOME") {
        return PathBuf::from(xdg).join("jobdesk");
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local/state/jobdesk");
    }
    PathBuf::from(".jobdesk")
}

/// Initialize tracing/logging from config.
///
/// Uses `try_init` so it's safe to call multiple times (e.g. from tests).
pub fn init_tracing(config: &ClientConfig) {
    use tracing_subscriber::fmt;

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match config.log_format.as_str() {
        "json" => fmt::fmt().with_env_filter(filter).json().try_init(),
        _ => fmt::fmt().with_env_filter(filter).try_init(),
    };
    drop(result);
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
