use async_trait::async_trait;
use certivault_core::{
    models::{Issuer, NewIssuer},
    AppError, IssuerStore,
};
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

use super::map_unique_violation;

/// Repository for issuer accounts
#[derive(Clone)]
pub struct IssuerRepository {
    pool: PgPool,
}

impl IssuerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IssuerStore for IssuerRepository {
    #[tracing::instrument(skip(self), fields(db.table = "issuers", db.operation = "select", db.record_id = %id))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Issuer>, AppError> {
        let issuer = sqlx::query_as::<Postgres, Issuer>(
            "SELECT id, organization_name, admin_name, email, password_hash, created_at FROM issuers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(issuer)
    }

    #[tracing::instrument(skip(self), fields(db.table = "issuers", db.operation = "select"))]
    async fn find_by_email(&self, email: &str) -> Result<Option<Issuer>, AppError> {
        let issuer = sqlx::query_as::<Postgres, Issuer>(
            "SELECT id, organization_name, admin_name, email, password_hash, created_at FROM issuers WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(issuer)
    }

    #[tracing::instrument(skip(self, issuer), fields(db.table = "issuers", db.operation = "insert"))]
    async fn create(&self, issuer: NewIssuer) -> Result<Issuer, AppError> {
        sqlx::query_as::<Postgres, Issuer>(
            r#"
            INSERT INTO issuers (organization_name, admin_name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, organization_name, admin_name, email, password_hash, created_at
            "#,
        )
        .bind(&issuer.organization_name)
        .bind(&issuer.admin_name)
        .bind(&issuer.email)
        .bind(&issuer.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "User already exists".to_string()))
    }
}
