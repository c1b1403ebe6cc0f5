//! Contact form intake.

use crate::{errors::*, traits::ContactIntake, types::*};
use async_trait::async_trait;
use securelayer_storage::{Storage, CF_CONTACTS};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub(crate) const MSG_INVALID_EMAIL: &str = "Invalid email address";

/// Contact intake backed by a [`Storage`] implementation
pub struct ContactIntakeService<S>
where
    S: Storage,
{
    storage: Arc<S>,
}

impl<S> ContactIntakeService<S>
where
    S: Storage,
{
    /// Create a new contact intake service
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl<S> ContactIntake for ContactIntakeService<S>
where
    S: Storage + 'static,
{
    async fn submit(&self, request: SubmitContactRequest) -> Result<()> {
        let email = request.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(RegistryError::Validation(MSG_INVALID_EMAIL.to_string()));
        }

        let document_id = Uuid::new_v4();
        let submission = ContactSubmission {
            name: request.name.trim().to_string(),
            email: email.to_string(),
            subject: request.subject.trim().to_string(),
            message: request.message.trim().to_string(),
            created_at: current_timestamp(),
        };

        self.storage
            .put(CF_CONTACTS, &document_id, &submission)
            .await?;

        info!(%document_id, "Contact submission stored");
        Ok(())
    }
}
