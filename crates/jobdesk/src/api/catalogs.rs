// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Localized catalogs (job areas, sectors, levels, ...).

use serde::Serialize;
use serde_json::json;

use crate::api::{segment, wire_name, ApiResponse, OrderItem, Page, PageQuery};
use crate::client::{ApiClient, ApiRequest};
use crate::error::ApiError;
use crate::types::{Catalog, CatalogLabels, CatalogType};

const BASE: &str = "/api/admin/catalogs";

#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    pub page: PageQuery,
    pub catalog_type: Option<CatalogType>,
    pub search: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCatalog {
    #[serde(rename = "type")]
    pub catalog_type: CatalogType,
    pub code: String,
    pub translations: CatalogLabels,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translations: Option<CatalogLabels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

/// `/api/admin/catalogs`.
pub struct CatalogsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CatalogsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &CatalogQuery) -> Result<ApiResponse<Page<Catalog>>, ApiError> {
        let req = query
            .page
            .apply(ApiRequest::get(BASE))
            .query_opt("type", query.catalog_type.as_ref().and_then(wire_name))
            .query_opt("search", query.search.as_deref().filter(|s| !s.is_empty()))
            .query_opt("isActive", query.is_active);
        self.client.send_envelope(&req).await
    }

    pub async fn create(&self, catalog: &NewCatalog) -> Result<ApiResponse<Catalog>, ApiError> {
        let req = ApiRequest::post(BASE).json_from(catalog)?;
        self.client.send_envelope(&req).await
    }

    pub async fn update(
        &self,
        id: &str,
        update: &CatalogUpdate,
    ) -> Result<ApiResponse<Catalog>, ApiError> {
        let req = ApiRequest::put(format!("{BASE}/{}", segment(id))).json_from(update)?;
        self.client.send_envelope(&req).await
    }

    /// Flip the active flag.
    pub async fn toggle_active(&self, id: &str) -> Result<ApiResponse<Catalog>, ApiError> {
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
