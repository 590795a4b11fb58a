// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User abuse reports.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::api::{segment, wire_name, ApiResponse, PageQuery};
use crate::client::{ApiClient, ApiRequest};
use crate::error::ApiError;
use crate::types::{Report, ReportStatus};

const BASE: &str = "/api/admin/reports";

#[derive(Debug, Clone, Default)]
pub struct ReportQuery {
    pub page: PageQuery,
    pub status: Option<ReportStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub total_pages: u32,
}

/// The reports listing uses its own `{reports, pagination}` shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportPage {
    #[serde(default)]
    pub reports: Vec<Report>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// `/api/admin/reports`.
pub struct ReportsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ReportsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ReportQuery) -> Result<ApiResponse<ReportPage>, ApiError> {
        let req = query
            .page
            .apply(ApiRequest::get(BASE))
            .query_opt("status", query.status.as_ref().and_then(wire_name));
        self.client.send_envelope(&req).await
    }

    pub async fn stats(&self) -> Result<ApiResponse<Value>, ApiError> {
        self.client.send_envelope(&ApiRequest::get(format!("{BASE}/stats"))).await
    }

    pub async fn mark_reviewed(&self, id: &str) -> Result<ApiResponse<Report>, ApiError> {
        self.transition(id, "review", None).await
    }

    pub async fn resolve(
        &self,
        id: &str,
        notes: Option<&str>,
    ) -> Result<ApiResponse<Report>, ApiError> {
        self.transition(id, "resolve", notes).await
    }

    pub async fn dismiss(
        &self,
        id: &str,
        notes: Option<&str>,
    ) -> Result<ApiResponse<Report>, ApiError> {
        self.transition(id, "dismiss", notes).await
    }

    async fn transition(
        &self,
        id: &str,
        action: &str,
        notes: Option<&str>,
    ) -> Result<ApiResponse<Report>, ApiError> {
        let mut req = ApiRequest::patch(format!("{BASE}/{}/{action}", segment(id)));
        if let Some(notes) = notes {
            req = req.json(json!({ "adminNotes": notes }));
        }
        self.client.send_envelope(&req).await
    }
}
