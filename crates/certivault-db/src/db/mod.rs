//! Database repositories for data access layer
//!
//! Each repository is responsible for a specific domain entity and implements
//! the matching store trait from `certivault_core::store`.

pub mod certificate;
pub mod issuer;

pub use certificate::CertificateRepository;
pub use issuer::IssuerRepository;

use certivault_core::AppError;

/// Map a unique-constraint violation to `AppError::Conflict`; everything else stays a database error.
pub(crate) fn map_unique_violation(err: sqlx::Error, conflict_message: String) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::Conflict(conflict_message)
        }
        _ => AppError::Database(err),
    }
}
