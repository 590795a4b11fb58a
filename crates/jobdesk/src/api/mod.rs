// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed wrappers over the backend's resource endpoints.
//!
//! Each wrapper borrows an [`ApiClient`], so every call goes through the same
//! bearer/refresh handling.

pub mod admin;
pub mod catalogs;
pub mod jobs;
pub mod moderation;
pub mod options;
pub mod plans;
pub mod reports;
pub mod terms;

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, ApiRequest};

pub use admin::{AdminApi, ApplicationQuery, JobFilter, SubscriptionQuery, UserQuery};
pub use catalogs::{CatalogQuery, CatalogUpdate, CatalogsApi, NewCatalog};
pub use jobs::{JobQuery, JobsApi};
pub use moderation::ModerationApi;
pub use options::OptionsApi;
pub use plans::{PlanQuery, PlansApi};
pub use reports::{Pagination, ReportPage, ReportQuery, ReportsApi};
pub use terms::{TermsApi, TermsUpload};

/// Response envelope used by every backend endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: T,
}

/// One page of a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub total_pages: u32,
}

/// Pagination parameters shared by the listing endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageQuery {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page: Some(page), page_size: Some(page_size) }
    }

    pub(crate) fn apply(&self, req: ApiRequest) -> ApiRequest {
        req.query_opt("page", self.page).query_opt("pageSize", self.page_size)
    }
}

/// New position for one row of an ordered list (catalogs, plans).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub order: i32,
}

/// Wire name of a SCREAMING_SNAKE_CASE enum, for query strings.
pub(crate) fn wire_name<T: Serialize>(value: &T) -> Option<String> {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => Some(s),
        _ => None,
    }
}

/// Percent-encode a value for use as a single path segment.
pub(crate) fn segment(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{b:02X}"),
        })
        .collect()
}

impl ApiClient {
    pub fn jobs(&self) -> JobsApi<'_> {
        JobsApi::new(self)
    }

    pub fn moderation(&self) -> ModerationApi<'_> {
        ModerationApi::new(self)
    }

    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi::new(self)
    }

    pub fn catalogs(&self) -> CatalogsApi<'_> {
        CatalogsApi::new(self)
    }

    pub fn plans(&self) -> PlansApi<'_> {
        PlansApi::new(self)
    }

    pub fn reports(&self) -> ReportsApi<'_> {
        ReportsApi::new(self)
    }

    pub fn options(&self) -> OptionsApi<'_> {
        OptionsApi::new(self)
    }

    pub fn terms(&self) -> TermsApi<'_> {
        TermsApi::new(self)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
