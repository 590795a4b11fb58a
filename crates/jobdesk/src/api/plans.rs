// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::json;

use crate::api::{segment, ApiResponse, OrderItem};
use crate::client::{ApiClient, ApiRequest};
use crate::error::ApiError;
use crate::types::{Plan, PlanInput};

const BASE: &str = "/api/admin/plans";

#[derive(Debug, Clone, Copy, Default)]
pub struct PlanQuery {
    /// Include inactive plans.
    pub include_inactive: bool,
}

/// `/api/admin/plans`. Plans are few, so listing is not paginated.
pub struct PlansApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PlansApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: PlanQuery) -> Result<ApiResponse<Vec<Plan>>, ApiError> {
        let req = ApiRequest::get(BASE)
            .query_opt("includeInactive", query.include_inactive.then_some(true));
        self.client.send_envelope(&req).await
    }

    pub async fn create(&self, plan: &PlanInput) -> Result<ApiResponse<Plan>, ApiError> {
        let req = ApiRequest::post(BASE).json_from(plan)?;
        self.client.send_envelope(&req).await
    }

    pub async fn update(&self, id: &str, plan: &PlanInput) -> Result<ApiResponse<Plan>, ApiError> {
        let req = ApiRequest::put(format!("{BASE}/{}", segment(id))).json_from(plan)?;
        self.client.send_envelope(&req).await
    }

    pub async fn toggle_active(&self, id: &str) -> Result<ApiResponse<Plan>, ApiError> {
        let req = ApiRequest::patch(format!("{BASE}/{}/toggle", segment(id)));
        self.client.send_envelope(&req).await
    }

    pub async fn delete(&self, id: &str) -> Result<ApiResponse<Option<serde_json::Value>>, ApiError> {
        let req = ApiRequest::delete(format!("{BASE}/{}", segment(id)));
        self.client.send_envelope(&req).await
    }

    pub async fn reorder(
        &self,
        items: &[OrderItem],
    ) -> Result<ApiResponse<Option<serde_json::Value>>, ApiError> {
        let req = ApiRequest::put(format!("{BASE}/reorder")).json(json!({ "items": items }));
        self.client.send_envelope(&req).await
    }
}
