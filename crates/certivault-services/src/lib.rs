//! Certivault Services Layer
//!
//! Business services sitting between the HTTP handlers and the stores: the
//! bulk CSV import pipeline and single-certificate operations. Keep thin HTTP
//! handling in certivault-api.

pub mod certificates;
pub mod dates;
pub mod import;

pub use certificates::CertificateService;
pub use import::{BulkImportService, RowRejection};
