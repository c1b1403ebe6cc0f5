//! Certificate registration and verification.

use crate::{errors::*, traits::CertificateRegistry, types::*};
use async_trait::async_trait;
use securelayer_storage::{
    BatchExt, Storage, StorageError, CF_CERTIFICATES, CF_CERTIFICATES_BY_ID,
};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

pub(crate) const MSG_FIELDS_REQUIRED: &str = "certificate_id, name, and issue_date are required";
pub(crate) const MSG_ID_REQUIRED: &str = "Certificate ID is required";
pub(crate) const MSG_ID_EXISTS: &str = "Certificate ID already exists";

/// Certificate registry backed by a [`Storage`] implementation
///
/// Uniqueness of `certificate_id` is enforced by the store: registration
/// commits the index entry and the record in one batch conditioned on the
/// index key being absent.
pub struct CertificateRegistryService<S>
where
    S: Storage,
{
    storage: Arc<S>,
}

impl<S> CertificateRegistryService<S>
where
    S: Storage,
{
    /// Create a new certificate registry
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    async fn find_by_certificate_id(
        &self,
        certificate_id: &str,
    ) -> Result<Option<CertificateRecord>> {
        let key = certificate_id.to_string();
        let document_id: Option<Uuid> = self.storage.get(CF_CERTIFICATES_BY_ID, &key).await?;

        let Some(document_id) = document_id else {
            return Ok(None);
        };

        let record: Option<CertificateRecord> =
            self.storage.get(CF_CERTIFICATES, &document_id).await?;
        if record.is_none() {
            warn!(%document_id, "Certificate index points at a missing document");
        }

        Ok(record)
    }
}

#[async_trait]
impl<S> CertificateRegistry for CertificateRegistryService<S>
where
    S: Storage + 'static,
{
    async fn register(&self, request: RegisterCertificateRequest) -> Result<()> {
        let certificate_id = request.certificate_id.trim();
        let name = request.name.trim();
        let issue_date = request.issue_date.trim();

        if certificate_id.is_empty() || name.is_empty() || issue_date.is_empty() {
            return Err(RegistryError::Validation(MSG_FIELDS_REQUIRED.to_string()));
        }

        let document_id = Uuid::new_v4();
        let record = CertificateRecord {
            certificate_id: certificate_id.to_string(),
            name: name.to_string(),
            issue_date: issue_date.to_string(),
            created_at: current_timestamp(),
        };

        let mut batch = self.storage.batch();
        batch.require_absent(CF_CERTIFICATES_BY_ID, &record.certificate_id)?;
        batch.put(CF_CERTIFICATES_BY_ID, &record.certificate_id, &document_id)?;
        batch.put(CF_CERTIFICATES, &document_id, &record)?;

        match batch.commit().await {
            Ok(()) => {
                info!(
                    %document_id,
                    certificate_id = %record.certificate_id,
                    "Certificate registered"
                );
                Ok(())
            }
            Err(StorageError::AlreadyExists { .. }) => {
                Err(RegistryError::Conflict(MSG_ID_EXISTS.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn verify(&self, certificate_id: &str) -> Result<VerifyOutcome> {
        let certificate_id = certificate_id.trim();
        if certificate_id.is_empty() {
            return Err(RegistryError::Validation(MSG_ID_REQUIRED.to_string()));
        }

        Ok(match self.find_by_certificate_id(certificate_id).await? {
            Some(record) => VerifyOutcome::Verified(record.into()),
            None => VerifyOutcome::NotFound,
        })
    }
}
