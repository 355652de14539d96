//! Store abstraction traits
//!
//! Services depend on these traits rather than on a concrete database, so the
//! PostgreSQL repositories and the in-memory store are interchangeable.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Certificate, Issuer, NewCertificate, NewIssuer};

/// Certificate persistence.
///
/// Implementations must enforce uniqueness of `certificate_id` at write time
/// and report a violation as `AppError::Conflict`.
#[async_trait]
pub trait CertificateStore: Send + Sync {
    async fn find_by_certificate_id(
        &self,
        certificate_id: &str,
    ) -> Result<Option<Certificate>, AppError>;

    /// Persist a certificate, stamping `id` and `created_at`.
    async fn insert(&self, certificate: NewCertificate) -> Result<Certificate, AppError>;

    /// Most recently created certificates for one issuer, newest first.
    async fn list_recent_by_creator(
        &self,
        created_by: Uuid,
        limit: i64,
    ) -> Result<Vec<Certificate>, AppError>;

    /// Count certificates created by an issuer, optionally only those created at or after `since`.
    async fn count_by_creator(
        &self,
        created_by: Uuid,
        since: Option<DateTime<Utc>>,
    ) -> Result<i64, AppError>;

    /// Cheap connectivity check used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}

/// Issuer account persistence. `email` is unique.
#[async_trait]
pub trait IssuerStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Issuer>, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Issuer>, AppError>;

    async fn create(&self, issuer: NewIssuer) -> Result<Issuer, AppError>;
}
