//! Bulk certificate import
//!
//! Turns an uploaded CSV into certificate records, one row at a time. Rows are
//! independent: a rejected row is recorded and processing moves on. Nothing is
//! retried and successful rows are never rolled back.

pub mod csv;
mod pipeline;

pub use csv::{parse_import_rows, split_fields, ImportRow};
pub use pipeline::BulkImportService;

/// Why a single row was not imported. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowRejection {
    #[error("Insufficient columns. Expected: Name, Certificate ID, Issue Date, Course/Program, Email")]
    InsufficientColumns,

    #[error("Missing required fields")]
    MissingRequiredFields,

    #[error("Certificate ID '{0}' already exists")]
    DuplicateCertificateId(String),

    #[error("Invalid date format. Use YYYY-MM-DD")]
    InvalidDate,

    /// Unexpected store failure while handling the row.
    #[error("{0}")]
    Store(String),
}
