//! Issuer account handlers: signup, login and profile.

use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use certivault_core::{
    models::{IssuerProfile, NewIssuer},
    AppError,
};
use std::sync::Arc;
use validator::Validate;

use crate::auth::models::{AuthResponse, IssuerContext, LoginRequest, SignupRequest};
use crate::auth::password::{hash_password, verify_password};
use crate::error::{HttpAppError, ValidatedJson};
use crate::state::AppState;

/// Register a new issuer account
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Account created", body = AuthResponse),
        (status = 400, description = "Missing fields or email already registered", body = crate::error::ErrorResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "auth"
)]
#[tracing::instrument(skip(state, request), fields(email = %request.email))]
pub async fn signup(
    State(state): State<Arc<AppState>>,
    ValidatedJson(mut request): ValidatedJson<SignupRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.organization_name = request.organization_name.trim().to_string();
    request.admin_name = request.admin_name.trim().to_string();
    request.email = request.email.trim().to_lowercase();

    if request.organization_name.is_empty()
        || request.admin_name.is_empty()
        || request.email.is_empty()
        || request.password.is_empty()
    {
        return Err(AppError::BadRequest("All fields are required".to_string()).into());
    }
    request.validate().map_err(AppError::from)?;

    let SignupRequest {
        organization_name,
        admin_name,
        email,
        password,
    } = request;

    if state.issuers.find_by_email(&email).await?.is_some() {
        return Err(user_exists().into());
    }

    let password_hash = hash_password(password, state.config.bcrypt_cost()).await?;

    let issuer = state
        .issuers
        .create(NewIssuer {
            organization_name,
            admin_name,
            email,
            password_hash,
        })
        .await
        .map_err(|e| match e {
            AppError::Conflict(_) => user_exists(),
            other => other,
        })?;

    let token = state.jwt.issue_token(issuer.id, &issuer.email)?;
    tracing::info!(issuer_id = %issuer.id, "Issuer registered");

    Ok(Json(AuthResponse {
        message: "User created successfully".to_string(),
        token,
        user: IssuerProfile::from(issuer),
    }))
}

fn user_exists() -> AppError {
    AppError::BadRequest("User already exists".to_string())
}

/// Exchange credentials for a token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = AuthResponse),
        (status = 400, description = "Missing fields", body = crate::error::ErrorResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse)
    ),
    tag = "auth"
)]
#[tracing::instrument(skip(state, request), fields(email = %request.email))]
pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let email = request.email.trim().to_lowercase();
    if email.is_empty() || request.password.is_empty() {
        return Err(AppError::BadRequest("Email and password are required".to_string()).into());
    }

    let invalid = || AppError::Unauthorized("Invalid credentials".to_string());

    let issuer = state
        .issuers
        .find_by_email(&email)
        .await?
        .ok_or_else(invalid)?;

    if !verify_password(request.password, issuer.password_hash.clone()).await? {
        return Err(invalid().into());
    }

    let token = state.jwt.issue_token(issuer.id, &issuer.email)?;

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token,
        user: IssuerProfile::from(issuer),
    }))
}

/// Profile of the authenticated issuer
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Issuer profile", body = IssuerProfile),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorResponse),
        (status = 404, description = "Issuer no longer exists", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
#[tracing::instrument(skip(state, ctx), fields(issuer_id = %ctx.issuer_id, email = %ctx.email))]
pub async fn me(
    State(state): State<Arc<AppState>>,
    ctx: IssuerContext,
) -> Result<impl IntoResponse, HttpAppError> {
    let issuer = state
        .issuers
        .find_by_id(ctx.issuer_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(IssuerProfile::from(issuer)))
}
