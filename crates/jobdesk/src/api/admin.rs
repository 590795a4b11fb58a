// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Back-office listings under `/api/admin`.

use serde_json::Value;

use crate::api::{wire_name, ApiResponse, Page, PageQuery};
use crate::client::{ApiClient, ApiRequest};
use crate::error::ApiError;
use crate::types::{
    Application, ApplicationStatus, Call, EmpresaProfile, Job, Message, ModerationStatus,
    PostulanteProfile, Subscription, SubscriptionStatus, User, UserType,
};

const BASE: &str = "/api/admin";

#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    pub page: PageQuery,
    pub user_type: Option<UserType>,
}

#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub page: PageQuery,
    pub status: Option<String>,
    pub moderation_status: Option<ModerationStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct ApplicationQuery {
    pub page: PageQuery,
    pub status: Option<ApplicationStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct SubscriptionQuery {
    pub page: PageQuery,
    pub status: Option<SubscriptionStatus>,
}

/// `/api/admin`.
pub struct AdminApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AdminApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    async fn page<T: serde::de::DeserializeOwned>(
        &self,
        req: ApiRequest,
    ) -> Result<ApiResponse<Page<T>>, ApiError> {
        self.client.send_envelope(&req).await
    }

    pub async fn users(&self, query: &UserQuery) -> Result<ApiResponse<Page<User>>, ApiError> {
        let req = query
            .page
            .apply(ApiRequest::get(format!("{BASE}/users")))
            .query_opt("userType", query.user_type.as_ref().and_then(wire_name));
        self.page(req).await
    }

    pub async fn empresas(
        &self,
        page: PageQuery,
    ) -> Result<ApiResponse<Page<EmpresaProfile>>, ApiError> {
        self.page(page.apply(ApiRequest::get(format!("{BASE}/empresas")))).await
    }

    pub async fn postulantes(
        &self,
        page: PageQuery,
    ) -> Result<ApiResponse<Page<PostulanteProfile>>, ApiError> {
        self.page(page.apply(ApiRequest::get(format!("{BASE}/postulantes")))).await
    }

    /// Every job regardless of publication or moderation state.
    pub async fn all_jobs(&self, filter: &JobFilter) -> Result<ApiResponse<Page<Job>>, ApiError> {
        let req = filter
            .page
            .apply(ApiRequest::get(format!("{BASE}/jobs/all")))
            .query_opt("status", filter.status.as_deref())
            .query_opt("moderationStatus", filter.moderation_status.as_ref().and_then(wire_name));
        self.page(req).await
    }

    pub async fn applications(
        &self,
        query: &ApplicationQuery,
    ) -> Result<ApiResponse<Page<Application>>, ApiError> {
        let req = query
            .page
            .apply(ApiRequest::get(format!("{BASE}/applications")))
            .query_opt("status", query.status.as_ref().and_then(wire_name));
        self.page(req).await
    }

    pub async fn messages(&self, page: PageQuery) -> Result<ApiResponse<Page<Message>>, ApiError> {
        self.page(page.apply(ApiRequest::get(format!("{BASE}/messages")))).await
    }

    pub async fn calls(&self, page: PageQuery) -> Result<ApiResponse<Page<Call>>, ApiError> {
        self.page(page.apply(ApiRequest::get(format!("{BASE}/calls")))).await
    }

    pub async fn subscriptions(
        &self,
        query: &SubscriptionQuery,
    ) -> Result<ApiResponse<Page<Subscription>>, ApiError> {
        let req = query
            .page
            .apply(ApiRequest::get(format!("{BASE}/subscriptions")))
            .query_opt("status", query.status.as_ref().and_then(wire_name));
        self.page(req).await
    }

    /// Dashboard counters. The shape varies by backend version.
    pub async fn stats(&self) -> Result<ApiResponse<Value>, ApiError> {
        self.client.send_envelope(&ApiRequest::get(format!("{BASE}/stats"))).await
    }
}
