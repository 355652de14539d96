use crate::error::HttpAppError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use certivault_core::{models::IssuerProfile, AppError};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: Uuid, // issuer id
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

/// Authenticated issuer, inserted into request extensions by the auth middleware
#[derive(Debug, Clone)]
pub struct IssuerContext {
    pub issuer_id: Uuid,
    pub email: String,
}

impl From<JwtClaims> for IssuerContext {
    fn from(claims: JwtClaims) -> Self {
        IssuerContext {
            issuer_id: claims.sub,
            email: claims.email,
        }
    }
}

// Extracted from request parts so it composes with Multipart.
impl<S> FromRequestParts<S> for IssuerContext
where
    S: Send + Sync,
{
    type Rejection = HttpAppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<IssuerContext>()
            .cloned()
            .ok_or_else(|| HttpAppError(AppError::Unauthorized("No token provided".to_string())))
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[serde(default)]
    pub organization_name: String,
    #[serde(default)]
    pub admin_name: String,
    #[serde(default)]
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: IssuerProfile,
}
