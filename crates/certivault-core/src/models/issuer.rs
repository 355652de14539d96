use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// An organization administrator allowed to issue certificates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Issuer {
    pub id: Uuid,
    pub organization_name: String,
    pub admin_name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewIssuer {
    pub organization_name: String,
    pub admin_name: String,
    pub email: String,
    pub password_hash: String,
}

/// Public view of an issuer account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssuerProfile {
    pub id: Uuid,
    pub organization_name: String,
    pub admin_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<Issuer> for IssuerProfile {
    fn from(issuer: Issuer) -> Self {
        IssuerProfile {
            id: issuer.id,
            organization_name: issuer.organization_name,
            admin_name: issuer.admin_name,
            email: issuer.email,
            created_at: issuer.created_at,
        }
    }
}
