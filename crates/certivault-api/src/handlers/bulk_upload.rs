//! Bulk certificate import from CSV
//!
//! Rows are imported independently; the response reports per-row failures
//! alongside the counts. Only request-level problems (no file, no data rows,
//! unknown issuer) fail the whole request.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Json},
};
use certivault_core::models::ImportResult;
use std::sync::Arc;

use crate::auth::models::IssuerContext;
use crate::constants::{CSV_TEMPLATE, CSV_TEMPLATE_FILENAME};
use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::upload::extract_csv_file;

/// Import certificates from an uploaded CSV file
///
/// Expected columns: `Name,Certificate ID,Issue Date,Course/Program,Email`
/// with dates as `YYYY-MM-DD`. The first line is treated as a header.
#[utoipa::path(
    post,
    path = "/api/certificates/bulk-upload",
    request_body(content = inline(Object), content_type = "multipart/form-data", description = "Form field `csvFile` holding the CSV"),
    responses(
        (status = 200, description = "Import finished; see errors for rejected rows", body = ImportResult),
        (status = 400, description = "No file or no data rows", body = crate::error::ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorResponse),
        (status = 404, description = "Issuer not found", body = crate::error::ErrorResponse),
        (status = 413, description = "File too large", body = crate::error::ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "certificates"
)]
#[tracing::instrument(skip(state, ctx, multipart), fields(issuer_id = %ctx.issuer_id, email = %ctx.email))]
pub async fn bulk_upload(
    State(state): State<Arc<AppState>>,
    ctx: IssuerContext,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let csv_text = extract_csv_file(multipart).await?;
    let result = state.bulk_import.import(ctx.issuer_id, &csv_text).await?;
    Ok(Json(result))
}

/// Download a CSV template with the expected header and two sample rows
#[utoipa::path(
    get,
    path = "/api/certificates/bulk-upload/template",
    responses(
        (status = 200, description = "CSV template", content_type = "text/csv", body = String)
    ),
    tag = "certificates"
)]
pub async fn csv_template() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", CSV_TEMPLATE_FILENAME),
            ),
        ],
        CSV_TEMPLATE,
    )
}
