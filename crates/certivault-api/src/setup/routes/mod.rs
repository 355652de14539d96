//! Route configuration and setup.
//!
//! Domain route groups live in [domains](domains); health checks in [health](health).

mod domains;
mod health;

use crate::auth::middleware::{auth_middleware, AuthState};
use crate::constants::{DOCS_PATH, OPENAPI_PATH};
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::get,
    Json, Router,
};
use certivault_core::Config;
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;
    let auth_state = Arc::new(AuthState {
        jwt: state.jwt.clone(),
    });

    let protected_routes = protected_routes().route_layer(
        axum::middleware::from_fn_with_state(auth_state, auth_middleware),
    );

    let http_concurrency_limit = std::env::var("HTTP_CONCURRENCY_LIMIT")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10_000)
        .max(1);
    tracing::info!(
        http_concurrency_limit = http_concurrency_limit,
        "HTTP concurrency limit layer enabled"
    );

    let app = public_routes()
        .merge(protected_routes)
        .merge(utoipa_rapidoc::RapiDoc::new(OPENAPI_PATH).path(DOCS_PATH))
        .layer(ConcurrencyLimitLayer::new(http_concurrency_limit))
        .layer(RequestBodyLimitLayer::new(config.max_upload_size_bytes()))
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    let cors = if config.cors_origins().iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins()
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", o, e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(Any)
    };
    Ok(cors)
}

fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route(
            OPENAPI_PATH,
            get(|| async { Json(crate::api_doc::get_openapi_spec()) }),
        )
        .merge(domains::auth_routes())
        .merge(domains::public_certificate_routes())
}

fn protected_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(domains::protected_auth_routes())
        .merge(domains::certificate_routes())
}
