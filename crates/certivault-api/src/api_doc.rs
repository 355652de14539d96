//! OpenAPI documentation.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::auth::models;
use crate::error;
use crate::handlers;
use certivault_core::models as core_models;

/// Returns the OpenAPI spec served at `/api/openapi.json`.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

/// Registers the bearer JWT scheme referenced by protected operations.
struct BearerAuthAddon;

impl Modify for BearerAuthAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Certivault API",
        version = "0.1.0",
        description = "Certificate issuance and public verification. Issuers create certificates one at a time or import them in bulk from CSV; anyone can verify a certificate by its ID."
    ),
    paths(
        // Auth
        handlers::auth::signup,
        handlers::auth::login,
        handlers::auth::me,
        // Certificates
        handlers::certificates::create_certificate,
        handlers::certificates::verify_certificate,
        handlers::certificates::recent_certificates,
        handlers::certificates::certificate_stats,
        // Bulk import
        handlers::bulk_upload::bulk_upload,
        handlers::bulk_upload::csv_template,
    ),
    components(
        schemas(
            models::SignupRequest,
            models::LoginRequest,
            models::AuthResponse,
            core_models::IssuerProfile,
            core_models::Certificate,
            core_models::CertificateStats,
            core_models::CreateCertificateRequest,
            core_models::CreateCertificateResponse,
            core_models::ImportResult,
            core_models::ImportRowError,
            error::ErrorResponse,
        )
    ),
    modifiers(&BearerAuthAddon),
    tags(
        (name = "auth", description = "Issuer signup, login and profile"),
        (name = "certificates", description = "Certificate creation, bulk import and verification")
    )
)]
pub struct ApiDoc;
