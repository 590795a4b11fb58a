// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terms of service / privacy policy documents.

use bytes::Bytes;

use crate::api::ApiResponse;
use crate::client::{ApiClient, ApiRequest, FormPart};
use crate::error::ApiError;
use crate::types::TermsDocument;

/// A PDF to publish as a new version of a terms document.
#[derive(Debug, Clone)]
pub struct TermsUpload {
    pub file_name: String,
    pub data: Bytes,
    /// Document kind, e.g. `TERMS` or `PRIVACY`.
    pub terms_type: String,
    pub version: String,
    pub description: Option<String>,
}

impl TermsUpload {
    fn into_parts(self) -> Vec<FormPart> {
        let mut parts = vec![
            FormPart::file("file", self.file_name, "application/pdf", self.data),
            FormPart::text("type", self.terms_type),
            FormPart::text("version", self.version),
        ];
        if let Some(description) = self.description.filter(|d| !d.is_empty()) {
            parts.push(FormPart::text("description", description));
        }
        parts
    }
}

/// `/api/terms`.
pub struct TermsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TermsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Every version, optionally restricted to one document kind.
    pub async fn all(
        &self,
        terms_type: Option<&str>,
    ) -> Result<ApiResponse<Vec<TermsDocument>>, ApiError> {
        let req = ApiRequest::get("/api/terms/all").query_opt("type", terms_type);
        self.client.send_envelope(&req).await
    }

    /// The version currently shown to users.
    pub async fn active(
        &self,
        terms_type: Option<&str>,
    ) -> Result<ApiResponse<Option<TermsDocument>>, ApiError> {
        let req = ApiRequest::get("/api/terms/active").query_opt("type", terms_type);
        self.client.send_envelope(&req).await
    }

    /// Upload a new version. The form is rebuilt if the request is replayed.
    pub async fn upload(&self, upload: TermsUpload) -> Result<ApiResponse<TermsDocument>, ApiError> {
        let req = ApiRequest::post("/api/terms/upload").multipart(upload.into_parts());
        self.client.send_envelope(&req).await
    }
}
