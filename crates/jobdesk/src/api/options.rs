// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::BTreeMap;

use crate::api::{segment, ApiResponse};
use crate::client::{ApiClient, ApiRequest};
use crate::error::ApiError;
use crate::types::OptionItem;

pub const DEFAULT_LANG: &str = "es";

/// `/api/options`: localized option lists keyed by category.
pub struct OptionsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> OptionsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Every category. `lang` defaults to Spanish.
    pub async fn all(
        &self,
        lang: Option<&str>,
    ) -> Result<ApiResponse<BTreeMap<String, Vec<OptionItem>>>, ApiError> {
        let req = ApiRequest::get("/api/options").query("lang", lang.unwrap_or(DEFAULT_LANG));
        self.client.send_envelope(&req).await
    }

    pub async fn by_category(
        &self,
        category: &str,
        lang: Option<&str>,
    ) -> Result<ApiResponse<Vec<OptionItem>>, ApiError> {
        let req = ApiRequest::get(format!("/api/options/{}", segment(category)))
            .query("lang", lang.unwrap_or(DEFAULT_LANG));
        self.client.send_envelope(&req).await
    }
}
