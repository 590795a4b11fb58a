// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job moderation queue.

use serde_json::json;

use crate::api::{segment, ApiResponse, Page, PageQuery};
use crate::client::{ApiClient, ApiRequest};
use crate::error::ApiError;
use crate::types::Job;

const BASE: &str = "/api/moderation/jobs";

/// `/api/moderation/jobs`.
pub struct ModerationApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ModerationApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Jobs awaiting a moderation decision.
    pub async fn pending_jobs(&self, page: PageQuery) -> Result<ApiResponse<Page<Job>>, ApiError> {
        let req = page.apply(ApiRequest::get(format!("{BASE}/pending")));
        self.client.send_envelope(&req).await
    }

    /// Jobs rejected by a moderator or by the automatic filter.
    pub async fn rejected_jobs(&self, page: PageQuery) -> Result<ApiResponse<Page<Job>>, ApiError> {
        let req = page.apply(ApiRequest::get(format!("{BASE}/rejected")));
        self.client.send_envelope(&req).await
    }

    pub async fn approve_job(&self, id: &str) -> Result<ApiResponse<Option<Job>>, ApiError> {
        let req = ApiRequest::post(format!("{BASE}/{}/approve", segment(id)));
        self.client.send_envelope(&req).await
    }

    pub async fn reject_job(
        &self,
        id: &str,
        reason: &str,
    ) -> Result<ApiResponse<Option<Job>>, ApiError> {
        let req = ApiRequest::post(format!("{BASE}/{}/reject", segment(id)))
            .json(json!({ "reason": reason }));
        self.client.send_envelope(&req).await
    }

    pub async fn job_details(&self, id: &str) -> Result<ApiResponse<Job>, ApiError> {
        let req = ApiRequest::get(format!("{BASE}/{}", segment(id)));
        self.client.send_envelope(&req).await
    }
}
