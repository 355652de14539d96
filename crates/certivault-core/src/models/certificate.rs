use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A persisted certificate record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: Uuid,
    pub name: String,
    /// Issuer-chosen identifier, unique across the whole store.
    pub certificate_id: String,
    pub issue_date: NaiveDate,
    pub course_or_program: String,
    pub email: Option<String>,
    pub organization: String,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Certificate fields supplied by the caller. The store assigns `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct NewCertificate {
    pub name: String,
    pub certificate_id: String,
    pub issue_date: NaiveDate,
    pub course_or_program: String,
    pub email: Option<String>,
    pub organization: String,
    pub created_by: Uuid,
}

/// Body of a single-certificate create request.
///
/// Required fields default to empty so that a missing field surfaces as a
/// validation message rather than a JSON rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCertificateRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub certificate_id: String,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub issue_date: String,
    #[serde(default)]
    pub course_or_program: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCertificateResponse {
    pub message: String,
    /// Store-assigned record id of the new certificate.
    pub certificate_id: Uuid,
}

/// Dashboard counters for one issuer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CertificateStats {
    pub total_certificates: i64,
    pub this_month: i64,
}
