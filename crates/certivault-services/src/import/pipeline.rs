use std::sync::Arc;

use certivault_core::{
    models::{Certificate, ImportResult, Issuer, NewCertificate},
    AppError, CertificateStore, IssuerStore,
};
use uuid::Uuid;

use super::csv::{parse_import_rows, ImportRow};
use super::RowRejection;
use crate::dates::parse_issue_date;

/// Required columns: name, certificate id, issue date, course/program. Email is optional.
const REQUIRED_COLUMNS: usize = 4;

/// Positional fields of one row, not yet checked against the store.
struct RowFields<'a> {
    name: &'a str,
    certificate_id: &'a str,
    issue_date: &'a str,
    course_or_program: &'a str,
    email: Option<&'a str>,
}

impl<'a> RowFields<'a> {
    fn from_row(row: &'a ImportRow) -> Result<Self, RowRejection> {
        let fields = &row.raw_fields;
        if fields.len() < REQUIRED_COLUMNS {
            return Err(RowRejection::InsufficientColumns);
        }

        let row_fields = RowFields {
            name: &fields[0],
            certificate_id: &fields[1],
            issue_date: &fields[2],
            course_or_program: &fields[3],
            email: fields.get(4).map(String::as_str).filter(|e| !e.is_empty()),
        };

        if row_fields.name.is_empty()
            || row_fields.certificate_id.is_empty()
            || row_fields.issue_date.is_empty()
            || row_fields.course_or_program.is_empty()
        {
            return Err(RowRejection::MissingRequiredFields);
        }

        Ok(row_fields)
    }
}

/// Imports certificates from CSV text on behalf of one issuer.
#[derive(Clone)]
pub struct BulkImportService {
    certificates: Arc<dyn CertificateStore>,
    issuers: Arc<dyn IssuerStore>,
}

impl BulkImportService {
    pub fn new(certificates: Arc<dyn CertificateStore>, issuers: Arc<dyn IssuerStore>) -> Self {
        Self {
            certificates,
            issuers,
        }
    }

    /// Run one import.
    ///
    /// Returns a request-level error when the text has no data rows or the
    /// issuer does not exist; otherwise every row is attempted and the
    /// outcome is aggregated into an [`ImportResult`].
    #[tracing::instrument(skip(self, csv_text), fields(import.bytes = csv_text.len()))]
    pub async fn import(&self, issuer_id: Uuid, csv_text: &str) -> Result<ImportResult, AppError> {
        let rows = parse_import_rows(csv_text)?;

        let issuer = self
            .issuers
            .find_by_id(issuer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let mut result = ImportResult::new(rows.len());
        for row in &rows {
            match self.import_row(&issuer, row).await {
                Ok(certificate) => {
                    tracing::debug!(
                        row = row.row_number,
                        certificate_id = %certificate.certificate_id,
                        "Row imported"
                    );
                    result.record_success();
                }
                Err(rejection) => {
                    tracing::debug!(row = row.row_number, reason = %rejection, "Row rejected");
                    result.record_failure(row.row_number, rejection.to_string());
                }
            }
        }

        tracing::info!(
            total = result.total,
            successful = result.successful,
            failed = result.failed,
            "Bulk import finished"
        );

        Ok(result)
    }

    async fn import_row(
        &self,
        issuer: &Issuer,
        row: &ImportRow,
    ) -> Result<Certificate, RowRejection> {
        let fields = RowFields::from_row(row)?;

        let existing = self
            .certificates
            .find_by_certificate_id(fields.certificate_id)
            .await
            .map_err(|e| RowRejection::Store(e.to_string()))?;
        if existing.is_some() {
            return Err(RowRejection::DuplicateCertificateId(
                fields.certificate_id.to_string(),
            ));
        }

        let issue_date = parse_issue_date(fields.issue_date).ok_or(RowRejection::InvalidDate)?;

        let new_certificate = NewCertificate {
            name: fields.name.to_string(),
            certificate_id: fields.certificate_id.to_string(),
            issue_date,
            course_or_program: fields.course_or_program.to_string(),
            email: fields.email.map(str::to_string),
            organization: issuer.organization_name.clone(),
            created_by: issuer.id,
        };

        self.certificates
            .insert(new_certificate)
            .await
            .map_err(|e| match e {
                // Another import inserted the same id after our lookup.
                AppError::Conflict(_) => {
                    RowRejection::DuplicateCertificateId(fields.certificate_id.to_string())
                }
                other => RowRejection::Store(other.to_string()),
            })
    }
}
