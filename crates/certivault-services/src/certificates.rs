//! Single-certificate operations: creation, public lookup and dashboard data.

use std::sync::Arc;

use certivault_core::{
    models::{Certificate, CertificateStats, CreateCertificateRequest, NewCertificate},
    AppError, CertificateStore, IssuerStore,
};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::dates::parse_issue_date;

/// Number of certificates shown on the dashboard.
pub const RECENT_CERTIFICATES_LIMIT: i64 = 5;

#[derive(Clone)]
pub struct CertificateService {
    certificates: Arc<dyn CertificateStore>,
    issuers: Arc<dyn IssuerStore>,
}

impl CertificateService {
    pub fn new(certificates: Arc<dyn CertificateStore>, issuers: Arc<dyn IssuerStore>) -> Self {
        Self {
            certificates,
            issuers,
        }
    }

    /// Create one certificate for the given issuer.
    #[tracing::instrument(skip(self, request), fields(certificate_id = %request.certificate_id))]
    pub async fn create(
        &self,
        issuer_id: Uuid,
        request: CreateCertificateRequest,
    ) -> Result<Certificate, AppError> {
        let name = request.name.trim();
        let certificate_id = request.certificate_id.trim();
        let issue_date = request.issue_date.trim();
        let course_or_program = request.course_or_program.trim();

        if name.is_empty()
            || certificate_id.is_empty()
            || issue_date.is_empty()
            || course_or_program.is_empty()
        {
            return Err(AppError::BadRequest(
                "All required fields must be provided".to_string(),
            ));
        }

        let issuer = self
            .issuers
            .find_by_id(issuer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if self
            .certificates
            .find_by_certificate_id(certificate_id)
            .await?
            .is_some()
        {
            return Err(duplicate_id());
        }

        let issue_date = parse_issue_date(issue_date).ok_or_else(|| {
            AppError::BadRequest("Invalid date format. Use YYYY-MM-DD".to_string())
        })?;

        let email = request
            .email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(str::to_string);

        let certificate = self
            .certificates
            .insert(NewCertificate {
                name: name.to_string(),
                certificate_id: certificate_id.to_string(),
                issue_date,
                course_or_program: course_or_program.to_string(),
                email,
                organization: issuer.organization_name,
                created_by: issuer.id,
            })
            .await
            .map_err(|e| match e {
                AppError::Conflict(_) => duplicate_id(),
                other => other,
            })?;

        tracing::info!(record_id = %certificate.id, "Certificate created");
        Ok(certificate)
    }

    /// Public lookup by certificate id.
    #[tracing::instrument(skip(self))]
    pub async fn verify(&self, certificate_id: &str) -> Result<Certificate, AppError> {
        self.certificates
            .find_by_certificate_id(certificate_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Certificate not found".to_string()))
    }

    /// The issuer's most recently created certificates, newest first.
    #[tracing::instrument(skip(self))]
    pub async fn recent(&self, issuer_id: Uuid) -> Result<Vec<Certificate>, AppError> {
        self.certificates
            .list_recent_by_creator(issuer_id, RECENT_CERTIFICATES_LIMIT)
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn stats(&self, issuer_id: Uuid) -> Result<CertificateStats, AppError> {
        self.stats_at(issuer_id, Utc::now()).await
    }

    async fn stats_at(
        &self,
        issuer_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<CertificateStats, AppError> {
        let total_certificates = self.certificates.count_by_creator(issuer_id, None).await?;
        let this_month = self
            .certificates
            .count_by_creator(issuer_id, Some(start_of_month(now)))
            .await?;

        Ok(CertificateStats {
            total_certificates,
            this_month,
        })
    }
}

fn duplicate_id() -> AppError {
    AppError::BadRequest("Certificate ID already exists".to_string())
}

/// Midnight UTC on the first day of the month containing `now`.
pub fn start_of_month(now: DateTime<Utc>) -> DateTime<Utc> {
    let first = NaiveDate::from_ymd_opt(now.year(), now.month(), 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_else(|| now.naive_utc());
    Utc.from_utc_datetime(&first)
}
