//! Service trait definitions.

use crate::{errors::Result, types::*};
use async_trait::async_trait;

/// Certificate registry
///
/// Records are created only through [`CertificateRegistry::register`] and are
/// never updated or deleted.
#[async_trait]
pub trait CertificateRegistry: Send + Sync {
    /// Register a new certificate
    ///
    /// Inputs are trimmed. Fails with `Validation` if any field is empty and
    /// with `Conflict` if the `certificate_id` is already registered.
    async fn register(&self, request: RegisterCertificateRequest) -> Result<()>;

    /// Look up a certificate by its external identifier
    async fn verify(&self, certificate_id: &str) -> Result<VerifyOutcome>;
}

/// Contact form intake
#[async_trait]
pub trait ContactIntake: Send + Sync {
    /// Validate and store a contact submission
    async fn submit(&self, request: SubmitContactRequest) -> Result<()>;
}
