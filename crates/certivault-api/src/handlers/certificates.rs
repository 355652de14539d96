//! Certificate handlers: creation, public verification and dashboard data.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use certivault_core::models::{
    Certificate, CertificateStats, CreateCertificateRequest, CreateCertificateResponse,
};
use std::sync::Arc;

use crate::auth::models::IssuerContext;
use crate::error::{HttpAppError, ValidatedJson};
use crate::state::AppState;

/// Create a single certificate
#[utoipa::path(
    post,
    path = "/api/certificates/create",
    request_body = CreateCertificateRequest,
    responses(
        (status = 200, description = "Certificate created", body = CreateCertificateResponse),
        (status = 400, description = "Missing fields, invalid date or duplicate certificate ID", body = crate::error::ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorResponse),
        (status = 404, description = "Issuer not found", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "certificates"
)]
#[tracing::instrument(skip(state, ctx, request), fields(issuer_id = %ctx.issuer_id))]
pub async fn create_certificate(
    State(state): State<Arc<AppState>>,
    ctx: IssuerContext,
    ValidatedJson(request): ValidatedJson<CreateCertificateRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let certificate = state
        .certificate_service
        .create(ctx.issuer_id, request)
        .await?;

    Ok(Json(CreateCertificateResponse {
        message: "Certificate created successfully".to_string(),
        certificate_id: certificate.id,
    }))
}

/// Look up a certificate by its public identifier
#[utoipa::path(
    get,
    path = "/api/certificates/verify/{id}",
    params(
        ("id" = String, Path, description = "Certificate ID printed on the certificate")
    ),
    responses(
        (status = 200, description = "Certificate found", body = Certificate),
        (status = 404, description = "Certificate not found", body = crate::error::ErrorResponse)
    ),
    tag = "certificates"
)]
#[tracing::instrument(skip(state))]
pub async fn verify_certificate(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let certificate = state.certificate_service.verify(&id).await?;
    Ok(Json(certificate))
}

/// The caller's five most recently created certificates
#[utoipa::path(
    get,
    path = "/api/certificates/recent",
    responses(
        (status = 200, description = "Newest first", body = Vec<Certificate>),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "certificates"
)]
#[tracing::instrument(skip(state, ctx), fields(issuer_id = %ctx.issuer_id))]
pub async fn recent_certificates(
    State(state): State<Arc<AppState>>,
    ctx: IssuerContext,
) -> Result<impl IntoResponse, HttpAppError> {
    let certificates = state.certificate_service.recent(ctx.issuer_id).await?;
    Ok(Json(certificates))
}

/// Certificate counts for the dashboard
#[utoipa::path(
    get,
    path = "/api/certificates/stats",
    responses(
        (status = 200, description = "Totals for the caller", body = CertificateStats),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "certificates"
)]
#[tracing::instrument(skip(state, ctx), fields(issuer_id = %ctx.issuer_id))]
pub async fn certificate_stats(
    State(state): State<Arc<AppState>>,
    ctx: IssuerContext,
) -> Result<impl IntoResponse, HttpAppError> {
    let stats = state.certificate_service.stats(ctx.issuer_id).await?;
    Ok(Json(stats))
}
