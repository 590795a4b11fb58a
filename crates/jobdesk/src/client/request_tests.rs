// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use reqwest::Method;

use super::{ApiRequest, Body, FormPart, PartValue};

const AUTH_ENDPOINTS: [&str; 2] = ["/api/auth/login", "/api/auth/refresh"];

#[test]
fn login_and_refresh_are_auth_endpoints() {
    assert!(ApiRequest::post("/api/auth/login").targets_any(&AUTH_ENDPOINTS));
    assert!(ApiRequest::post("/api/auth/refresh/").targets_any(&AUTH_ENDPOINTS));
    assert!(ApiRequest::post("/api/auth/login?next=%2F").targets_any(&AUTH_ENDPOINTS));
}

#[test]
fn resource_paths_are_not_auth_endpoints() {
    assert!(!ApiRequest::get("/api/auth/me").targets_any(&AUTH_ENDPOINTS));
    assert!(!ApiRequest::get("/api/admin/users").targets_any(&AUTH_ENDPOINTS));
    assert!(!ApiRequest::get("/api/auth/login-history").targets_any(&AUTH_ENDPOINTS));
    assert!(!ApiRequest::get("/api/admin/users").targets_any(&[""]));
}

#[test]
fn url_joins_base_and_encodes_query() -> anyhow::Result<()> {
    let req = ApiRequest::get("/api/jobs")
        .query("page", 2)
        .query("search", "senior dev & ops")
        .query_opt("status", None::<&str>)
        .query_opt("pageSize", Some(10));
    let url = req.url("http://localhost:4000/")?;
    assert_eq!(url.path(), "/api/jobs");
    assert_eq!(url.query(), Some("page=2&search=senior+dev+%26+ops&pageSize=10"));
    Ok(())
}

#[test]
fn url_accepts_relative_path_without_slash() -> anyhow::Result<()> {
    let url = ApiRequest::get("api/options").url("http://localhost:4000")?;
    assert_eq!(url.as_str(), "http://localhost:4000/api/options");
    Ok(())
}

#[test]
fn invalid_base_url_is_an_invalid_request() {
    let err = ApiRequest::get("/x").url("not a url").err();
    assert!(matches!(err, Some(crate::error::ApiError::InvalidRequest(_))));
}

#[test]
fn builders_record_method_body_and_headers() -> anyhow::Result<()> {
    let req = ApiRequest::post("/api/moderation/jobs/j1/reject")
        .json(serde_json::json!({ "reason": "spam" }))
        .header("x-request-source", "dashboard")?;
    assert_eq!(req.method(), &Method::POST);
    assert!(matches!(req.body(), Body::Json(v) if v["reason"] == "spam"));
    assert_eq!(req.headers().get("x-request-source").map(|v| v.as_bytes()), Some(&b"dashboard"[..]));

    assert!(ApiRequest::get("/x").header("bad header", "v").is_err());
    Ok(())
}

#[test]
fn multipart_parts_are_cloneable_for_replay() -> anyhow::Result<()> {
    let req = ApiRequest::post("/api/terms/upload").multipart(vec![
        FormPart::text("type", "TERMS"),
        FormPart::file("file", "terms.pdf", "application/pdf", b"%PDF-1.4".to_vec()),
    ]);
    let replay = req.clone();
    let Body::Multipart(parts) = replay.body() else {
        anyhow::bail!("multipart body expected");
    };
    assert_eq!(parts.len(), 2);
    assert!(matches!(&parts[1].value, PartValue::File { file_name, .. } if file_name == "terms.pdf"));
    Ok(())
}

#[test]
fn build_attaches_bearer_only_when_present() -> anyhow::Result<()> {
    crate::client::install_crypto_provider();
    let http = reqwest::Client::builder().build()?;
    let req = ApiRequest::get("/api/admin/stats");

    let with = req.build(&http, "http://localhost:4000", Some("tok"))?.build()?;
    assert_eq!(
        with.headers().get("authorization").map(|v| v.as_bytes()),
        Some(&b"Bearer tok"[..])
    );

    let without = req.build(&http, "http://localhost:4000", None)?.build()?;
    assert!(without.headers().get("authorization").is_none());
    Ok(())
}
