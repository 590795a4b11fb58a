// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Marketplace records as served by the backend (camelCase on the wire).
//!
//! Optional fields default to `None` so partial projections (list views,
//! nested includes) decode with the same types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    Postulante,
    Empresa,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub user_type: UserType,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub empresa: Option<EmpresaProfile>,
    #[serde(default)]
    pub postulante: Option<PostulanteProfile>,
}

/// Account summary embedded in profile records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Company profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmpresaProfile {
    pub id: String,
    pub user_id: String,
    pub company_name: String,
    #[serde(default)]
    pub razon_social: Option<String>,
    #[serde(default)]
    pub cuit: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub sitio_web: Option<String>,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub industria: Option<String>,
    #[serde(default)]
    pub cantidad_empleados: Option<String>,
    #[serde(default)]
    pub ciudad: Option<String>,
    #[serde(default)]
    pub provincia: Option<String>,
    #[serde(default)]
    pub pais: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub user: Option<UserSummary>,
    #[serde(default)]
    pub subscriptions: Option<Vec<Subscription>>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Candidate profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostulanteProfile {
    pub id: String,
    pub user_id: String,
    pub full_name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub cv_url: Option<String>,
    #[serde(default)]
    pub resume_title: Option<String>,
    #[serde(default)]
    pub employment_status: Option<String>,
    #[serde(default)]
    pub minimum_salary: Option<f64>,
    #[serde(default)]
    pub linked_in_url: Option<String>,
    #[serde(default)]
    pub user: Option<UserSummary>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModerationStatus {
    PendingPayment,
    Pending,
    Approved,
    Rejected,
    AutoRejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

/// Job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub empresa_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub work_mode: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    pub moderation_status: ModerationStatus,
    #[serde(default)]
    pub moderation_reason: Option<String>,
    #[serde(default)]
    pub moderated_by: Option<String>,
    #[serde(default)]
    pub moderated_at: Option<String>,
    #[serde(default)]
    pub auto_rejection_reason: Option<String>,
    #[serde(default)]
    pub is_paid: Option<bool>,
    #[serde(default)]
    pub payment_amount: Option<f64>,
    #[serde(default)]
    pub payment_currency: Option<String>,
    #[serde(default)]
    pub payment_status: Option<PaymentStatus>,
    #[serde(default)]
    pub empresa: Option<EmpresaProfile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Pending,
    Reviewed,
    Accepted,
    Rejected,
    Interview,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub postulante_id: String,
    pub job_id: String,
    pub status: ApplicationStatus,
    pub applied_at: String,
    #[serde(default)]
    pub cover_letter: Option<String>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub job: Option<Job>,
    #[serde(default)]
    pub postulante: Option<PostulanteProfile>,
}

/// Direct message between two users.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    pub content: String,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CallStatus {
    Pending,
    Accepted,
    Rejected,
    Missed,
    Ended,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    pub status: CallStatus,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub ended_at: Option<String>,
    /// Seconds.
    #[serde(default)]
    pub duration: Option<u64>,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanType {
    Basic,
    Premium,
    Enterprise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    Active,
    Canceled,
    Expired,
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub empresa_id: String,
    pub plan_type: PlanType,
    pub status: SubscriptionStatus,
    #[serde(default)]
    pub paypal_order_id: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub canceled_at: Option<String>,
    #[serde(default)]
    pub cancel_reason: Option<String>,
    #[serde(default)]
    pub empresa: Option<Box<EmpresaProfile>>,
}

/// Publication plan sold to companies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub code: String,
    pub price: f64,
    pub currency: String,
    pub duration_days: u32,
    #[serde(default)]
    pub unlimited_cvs: bool,
    #[serde(default)]
    pub allowed_modifications: u32,
    #[serde(default)]
    pub can_modify_category: bool,
    #[serde(default)]
    pub category_modifications: u32,
    #[serde(default)]
    pub has_featured_option: bool,
    #[serde(default)]
    pub launch_benefit_available: bool,
    #[serde(default)]
    pub launch_benefit_duration: Option<u32>,
    pub is_active: bool,
    pub order: i32,
    #[serde(default)]
    pub description: Option<String>,
}

/// Create/update payload for a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanInput {
    pub name: String,
    pub code: String,
    pub price: f64,
    pub currency: String,
    pub duration_days: u32,
    pub unlimited_cvs: bool,
    pub allowed_modifications: u32,
    pub can_modify_category: bool,
    pub category_modifications: u32,
    pub has_featured_option: bool,
    pub launch_benefit_available: bool,
    pub launch_benefit_duration: Option<u32>,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CatalogType {
    JobArea,
    JobType,
    JobLevel,
    JobTypes,
    ExperienceLevels,
    ApplicationStatuses,
    Modalities,
    LanguageLevels,
    CompanySizes,
    Sectors,
    StudyTypes,
    StudyStatuses,
    MaritalStatuses,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Lang {
    Es,
    En,
    Pt,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogTranslation {
    #[serde(default)]
    pub id: Option<String>,
    pub lang: Lang,
    pub label: String,
}

/// Localized option list entry (job areas, sectors, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub id: String,
    #[serde(rename = "type")]
    pub catalog_type: CatalogType,
    pub code: String,
    pub is_active: bool,
    pub order: i32,
    #[serde(default)]
    pub translations: Vec<CatalogTranslation>,
}

impl Catalog {
    pub fn label(&self, lang: Lang) -> Option<&str> {
        self.translations.iter().find(|t| t.lang == lang).map(|t| t.label.as_str())
    }
}

/// Labels keyed by lowercase language code, as the catalog endpoints expect.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogLabels {
    pub es: String,
    pub en: String,
    pub pt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    Pending,
    Reviewed,
    Resolved,
    Dismissed,
}

/// Abuse report filed by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub status: ReportStatus,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub reporter_id: Option<String>,
    #[serde(default)]
    pub reported_user_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Terms of service or privacy policy document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermsDocument {
    pub id: String,
    #[serde(rename = "type")]
    pub terms_type: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Localized option value served by `/api/options`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionItem {
    pub value: String,
    pub label: String,
}
