//! Domain route groups (auth, certificates).

use crate::constants::{AUTH_PREFIX, CERTIFICATES_PREFIX};
use crate::handlers;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub fn auth_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(&format!("{}/signup", AUTH_PREFIX), post(handlers::auth::signup))
        .route(&format!("{}/login", AUTH_PREFIX), post(handlers::auth::login))
}

pub fn protected_auth_routes() -> Router<Arc<AppState>> {
    Router::new().route(&format!("{}/me", AUTH_PREFIX), get(handlers::auth::me))
}

/// Verification and the CSV template need no account.
pub fn public_certificate_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/verify/{{id}}", CERTIFICATES_PREFIX),
            get(handlers::certificates::verify_certificate),
        )
        .route(
            &format!("{}/bulk-upload/template", CERTIFICATES_PREFIX),
            get(handlers::bulk_upload::csv_template),
        )
}

pub fn certificate_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/create", CERTIFICATES_PREFIX),
            post(handlers::certificates::create_certificate),
        )
        .route(
            &format!("{}/recent", CERTIFICATES_PREFIX),
            get(handlers::certificates::recent_certificates),
        )
        .route(
            &format!("{}/stats", CERTIFICATES_PREFIX),
            get(handlers::certificates::certificate_stats),
        )
        .route(
            &format!("{}/bulk-upload", CERTIFICATES_PREFIX),
            post(handlers::bulk_upload::bulk_upload),
        )
}
