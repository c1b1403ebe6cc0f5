//! Contact form handler.

use axum::{extract::State, response::Json};
use securelayer_registry::{ContactIntake, SubmitContactRequest};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::{map_service_error, ApiError},
    extractors::ApiJson,
    state::AppState,
};

use super::helpers::MessageResponse;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// POST /submit - Store a contact form submission
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<ContactRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .contact_intake
        .submit(SubmitContactRequest {
            name: req.name,
            email: req.email,
            subject: req.subject,
            message: req.message,
        })
        .await
        .map_err(|e| map_service_error(e, state.config.expose_error_details))?;

    Ok(Json(MessageResponse::ok(
        "Thank you for your message! We will get back to you soon.",
    )))
}
