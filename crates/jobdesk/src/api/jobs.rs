// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::api::{segment, ApiResponse, Page, PageQuery};
use crate::client::{ApiClient, ApiRequest};
use crate::error::ApiError;
use crate::types::Job;

/// Filters for the public job listing.
#[derive(Debug, Clone, Default)]
pub struct JobQuery {
    pub page: PageQuery,
    pub search: Option<String>,
    pub status: Option<String>,
}

/// `/api/jobs`.
pub struct JobsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> JobsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &JobQuery) -> Result<ApiResponse<Page<Job>>, ApiError> {
        let req = query
            .page
            .apply(ApiRequest::get("/api/jobs"))
            .query_opt("search", query.search.as_deref().filter(|s| !s.is_empty()))
            .query_opt("status", query.status.as_deref());
        self.client.send_envelope(&req).await
    }

    pub async fn get(&self, id: &str) -> Result<ApiResponse<Job>, ApiError> {
        let req = ApiRequest::get(format!("/api/jobs/{}", segment(id)));
        self.client.send_envelope(&req).await
    }

    pub async fn delete(&self, id: &str) -> Result<ApiResponse<Option<serde_json::Value>>, ApiError> {
        let req = ApiRequest::delete(format!("/api/jobs/{}", segment(id)));
        self.client.send_envelope(&req).await
    }
}
