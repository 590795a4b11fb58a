// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Authenticated HTTP access to the marketplace backend.

pub mod coordinator;
pub mod http;
pub mod request;

pub use coordinator::{RefreshCoordinator, RefreshError, RefreshOutcome};
pub use http::ApiClient;
pub use request::{ApiRequest, Body, FormPart, PartValue};

/// Install the ring crypto provider for rustls if none is installed yet.
pub(crate) fn install_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}
