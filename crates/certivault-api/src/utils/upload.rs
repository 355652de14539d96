//! Multipart helpers for file upload handlers

use crate::constants::CSV_FILE_FIELD;
use crate::error::HttpAppError;
use axum::extract::Multipart;
use certivault_core::AppError;

/// Read the `csvFile` field as text. Other fields are drained and ignored.
///
/// Invalid UTF-8 is replaced rather than rejected; the import reports any
/// resulting garbage per row.
pub async fn extract_csv_file(mut multipart: Multipart) -> Result<String, HttpAppError> {
    let mut content: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        if content.is_none() && field.name() == Some(CSV_FILE_FIELD) {
            let data = field.bytes().await?;
            content = Some(String::from_utf8_lossy(&data).into_owned());
        }
    }

    content.ok_or_else(|| HttpAppError(AppError::BadRequest("No CSV file provided".to_string())))
}
