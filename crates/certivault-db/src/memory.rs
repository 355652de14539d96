//! In-memory store
//!
//! Implements both store traits on top of `tokio::sync::RwLock`. Selected with
//! `STORE_BACKEND=memory` and used by the test suites. Data is lost on restart.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use certivault_core::{
    models::{Certificate, Issuer, NewCertificate, NewIssuer},
    AppError, CertificateStore, IssuerStore,
};
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct MemoryState {
    /// Keyed by `certificate_id`.
    certificates: HashMap<String, Certificate>,
    issuers: HashMap<Uuid, Issuer>,
}

/// Shared in-memory store. Clones share the same data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CertificateStore for MemoryStore {
    async fn find_by_certificate_id(
        &self,
        certificate_id: &str,
    ) -> Result<Option<Certificate>, AppError> {
        let state = self.state.read().await;
        Ok(state.certificates.get(certificate_id).cloned())
    }

    #[tracing::instrument(skip(self, certificate), fields(store = "memory", certificate_id = %certificate.certificate_id))]
    async fn insert(&self, certificate: NewCertificate) -> Result<Certificate, AppError> {
        // Check and insert under one write lock so concurrent imports cannot both win.
        let mut state = self.state.write().await;
        if state.certificates.contains_key(&certificate.certificate_id) {
            return Err(AppError::Conflict(format!(
                "Certificate ID '{}' already exists",
                certificate.certificate_id
            )));
        }

        let record = Certificate {
            id: Uuid::new_v4(),
            name: certificate.name,
            certificate_id: certificate.certificate_id,
            issue_date: certificate.issue_date,
            course_or_program: certificate.course_or_program,
            email: certificate.email,
            organization: certificate.organization,
            created_by: certificate.created_by,
            created_at: Utc::now(),
        };
        state
            .certificates
            .insert(record.certificate_id.clone(), record.clone());

        Ok(record)
    }

    async fn list_recent_by_creator(
        &self,
        created_by: Uuid,
        limit: i64,
    ) -> Result<Vec<Certificate>, AppError> {
        let state = self.state.read().await;
        let mut certificates: Vec<Certificate> = state
            .certificates
            .values()
            .filter(|c| c.created_by == created_by)
            .cloned()
            .collect();
        certificates.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        certificates.truncate(usize::try_from(limit.max(0)).unwrap_or(usize::MAX));

        Ok(certificates)
    }

    async fn count_by_creator(
        &self,
        created_by: Uuid,
        since: Option<DateTime<Utc>>,
    ) -> Result<i64, AppError> {
        let state = self.state.read().await;
        let count = state
            .certificates
            .values()
            .filter(|c| c.created_by == created_by)
            .filter(|c| since.map_or(true, |since| c.created_at >= since))
            .count();

        Ok(count as i64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[async_trait]
impl IssuerStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Issuer>, AppError> {
        let state = self.state.read().await;
        Ok(state.issuers.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Issuer>, AppError> {
        let state = self.state.read().await;
        Ok(state.issuers.values().find(|i| i.email == email).cloned())
    }

    #[tracing::instrument(skip(self, issuer), fields(store = "memory"))]
    async fn create(&self, issuer: NewIssuer) -> Result<Issuer, AppError> {
        let mut state = self.state.write().await;
        if state.issuers.values().any(|i| i.email == issuer.email) {
            return Err(AppError::Conflict("User already exists".to_string()));
        }

        let record = Issuer {
            id: Uuid::new_v4(),
            organization_name: issuer.organization_name,
            admin_name: issuer.admin_name,
            email: issuer.email,
            password_hash: issuer.password_hash,
            created_at: Utc::now(),
        };
        state.issuers.insert(record.id, record.clone());

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn new_certificate(certificate_id: &str, created_by: Uuid) -> NewCertificate {
        NewCertificate {
            name: "Alice".to_string(),
            certificate_id: certificate_id.to_string(),
            issue_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            course_or_program: "Course A".to_string(),
            email: None,
            organization: "Acme Academy".to_string(),
            created_by,
        }
    }

    #[tokio::test]
    async fn test_insert_then_find() {
        let store = MemoryStore::new();
        let issuer = Uuid::new_v4();

        let inserted = store
            .insert(new_certificate("CERT-1", issuer))
            .await
            .unwrap();
        let found = store.find_by_certificate_id("CERT-1").await.unwrap();

        assert_eq!(found, Some(inserted));
        assert!(store
            .find_by_certificate_id("CERT-2")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_duplicate_certificate_id_conflicts_across_issuers() {
        let store = MemoryStore::new();
        store
            .insert(new_certificate("CERT-1", Uuid::new_v4()))
            .await
            .unwrap();

        let err = store
            .insert(new_certificate("CERT-1", Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_concurrent_inserts_of_same_id_persist_once() {
        let store = MemoryStore::new();
        let issuer = Uuid::new_v4();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.insert(new_certificate("CERT-RACE", issuer)).await })
            })
            .collect();

        let mut ok = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                ok += 1;
            }
        }

        assert_eq!(ok, 1);
        assert_eq!(store.count_by_creator(issuer, None).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_recent_and_counts_are_scoped_to_creator() {
        let store = MemoryStore::new();
        let issuer = Uuid::new_v4();
        let other = Uuid::new_v4();

        for i in 0..7 {
            store
                .insert(new_certificate(&format!("CERT-{}", i), issuer))
                .await
                .unwrap();
        }
        store
            .insert(new_certificate("OTHER-1", other))
            .await
            .unwrap();

        let recent = store.list_recent_by_creator(issuer, 5).await.unwrap();
        assert_eq!(recent.len(), 5);
        assert!(recent.iter().all(|c| c.created_by == issuer));
        assert!(recent
            .windows(2)
            .all(|w| w[0].created_at >= w[1].created_at));

        assert_eq!(store.count_by_creator(issuer, None).await.unwrap(), 7);
        let future = Utc::now() + Duration::hours(1);
        assert_eq!(
            store.count_by_creator(issuer, Some(future)).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_issuer_email_unique() {
        let store = MemoryStore::new();
        let new_issuer = || NewIssuer {
            organization_name: "Acme Academy".to_string(),
            admin_name: "Ada".to_string(),
            email: "ada@acme.test".to_string(),
            password_hash: "hash".to_string(),
        };

        let created = store.create(new_issuer()).await.unwrap();
        assert_eq!(
            store.find_by_id(created.id).await.unwrap().map(|i| i.email),
            Some("ada@acme.test".to_string())
        );
        assert!(store
            .find_by_email("ada@acme.test")
            .await
            .unwrap()
            .is_some());

        let err = store.create(new_issuer()).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }
}
