use crate::auth::jwt::JwtService;
use crate::auth::models::IssuerContext;
use crate::error::HttpAppError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use certivault_core::AppError;
use std::sync::Arc;

#[derive(Clone)]
pub struct AuthState {
    pub jwt: JwtService,
}

/// Require a valid `Authorization: Bearer <token>` header and attach the issuer context.
pub async fn auth_middleware(
    State(auth_state): State<Arc<AuthState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = match request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
    {
        Some(token) => token,
        None => {
            tracing::debug!("Request rejected: missing bearer token");
            return HttpAppError(AppError::Unauthorized("No token provided".to_string()))
                .into_response();
        }
    };

    let claims = match auth_state.jwt.validate_token(token) {
        Ok(claims) => claims,
        Err(e) => return HttpAppError(e).into_response(),
    };

    tracing::debug!(issuer_id = %claims.sub, "Request authenticated");
    request.extensions_mut().insert(IssuerContext::from(claims));
    next.run(request).await
}
