use async_trait::async_trait;
use certivault_core::{
    models::{Certificate, NewCertificate},
    AppError, CertificateStore,
};
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

use super::map_unique_violation;

const CERTIFICATE_COLUMNS: &str = "id, name, certificate_id, issue_date, course_or_program, email, organization, created_by, created_at";

/// Repository for managing certificates
#[derive(Clone)]
pub struct CertificateRepository {
    pool: PgPool,
}

impl CertificateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CertificateStore for CertificateRepository {
    #[tracing::instrument(skip(self), fields(db.table = "certificates", db.operation = "select"))]
    async fn find_by_certificate_id(
        &self,
        certificate_id: &str,
    ) -> Result<Option<Certificate>, AppError> {
        let certificate = sqlx::query_as::<Postgres, Certificate>(&format!(
            "SELECT {} FROM certificates WHERE certificate_id = $1",
            CERTIFICATE_COLUMNS
        ))
        .bind(certificate_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(certificate)
    }

    #[tracing::instrument(skip(self, certificate), fields(
        db.table = "certificates",
        db.operation = "insert",
        certificate_id = %certificate.certificate_id
    ))]
    async fn insert(&self, certificate: NewCertificate) -> Result<Certificate, AppError> {
        sqlx::query_as::<Postgres, Certificate>(&format!(
            r#"
            INSERT INTO certificates (name, certificate_id, issue_date, course_or_program, email, organization, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            CERTIFICATE_COLUMNS
        ))
        .bind(&certificate.name)
        .bind(&certificate.certificate_id)
        .bind(certificate.issue_date)
        .bind(&certificate.course_or_program)
        .bind(&certificate.email)
        .bind(&certificate.organization)
        .bind(certificate.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(
                e,
                format!(
                    "Certificate ID '{}' already exists",
                    certificate.certificate_id
                ),
            )
        })
    }

    #[tracing::instrument(skip(self), fields(db.table = "certificates", db.operation = "select"))]
    async fn list_recent_by_creator(
        &self,
        created_by: Uuid,
        limit: i64,
    ) -> Result<Vec<Certificate>, AppError> {
        let certificates = sqlx::query_as::<Postgres, Certificate>(&format!(
            "SELECT {} FROM certificates WHERE created_by = $1 ORDER BY created_at DESC LIMIT $2",
            CERTIFICATE_COLUMNS
        ))
        .bind(created_by)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(certificates)
    }

    #[tracing::instrument(skip(self), fields(db.table = "certificates", db.operation = "count"))]
    async fn count_by_creator(
        &self,
        created_by: Uuid,
        since: Option<DateTime<Utc>>,
    ) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<Postgres, i64>(
            "SELECT COUNT(*) FROM certificates WHERE created_by = $1 AND ($2::timestamptz IS NULL OR created_at >= $2)",
        )
        .bind(created_by)
        .bind(since)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
