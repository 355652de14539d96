//! Application state shared by all handlers.

use crate::auth::jwt::JwtService;
use certivault_core::{CertificateStore, Config, IssuerStore};
use certivault_services::{BulkImportService, CertificateService};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub certificates: Arc<dyn CertificateStore>,
    pub issuers: Arc<dyn IssuerStore>,
    pub jwt: JwtService,
    pub certificate_service: CertificateService,
    pub bulk_import: BulkImportService,
}

impl AppState {
    /// Wire services on top of the given stores.
    pub fn new(
        config: Config,
        certificates: Arc<dyn CertificateStore>,
        issuers: Arc<dyn IssuerStore>,
    ) -> Self {
        let jwt = JwtService::new(config.jwt_secret(), config.jwt_expiry_hours());
        let certificate_service = CertificateService::new(certificates.clone(), issuers.clone());
        let bulk_import = BulkImportService::new(certificates.clone(), issuers.clone());

        Self {
            config,
            certificates,
            issuers,
            jwt,
            certificate_service,
            bulk_import,
        }
    }
}
