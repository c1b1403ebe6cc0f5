//! Certificate verification and registration handlers.

use axum::{extract::State, http::StatusCode, response::Json};
use securelayer_registry::{
    CertificateRegistry, CertificateView, RegisterCertificateRequest, VerifyOutcome,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    error::{map_service_error, ApiError},
    extractors::ApiJson,
    state::AppState,
};

use super::helpers::MessageResponse;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerifyCertificateRequest {
    pub certificate_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddCertificateRequest {
    pub certificate_id: String,
    pub name: String,
    pub issue_date: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyCertificateResponse {
    pub success: bool,
    pub message: &'static str,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<CertificateView>,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /verify-certificate - Look up a certificate by its identifier
pub async fn verify_certificate(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<VerifyCertificateRequest>,
) -> Result<(StatusCode, Json<VerifyCertificateResponse>), ApiError> {
    let outcome = state
        .certificate_registry
        .verify(&req.certificate_id)
        .await
        .map_err(|e| {
            map_service_error(e, state.config.expose_error_details).with_status("error")
        })?;

    let response = match outcome {
        VerifyOutcome::Verified(view) => (
            StatusCode::OK,
            Json(VerifyCertificateResponse {
                success: true,
                message: "Certificate verified successfully",
                status: "verified",
                data: Some(view),
            }),
        ),
        VerifyOutcome::NotFound => (
            StatusCode::NOT_FOUND,
            Json(VerifyCertificateResponse {
                success: false,
                message: "Certificate not found",
                status: "not_found",
                data: None,
            }),
        ),
    };

    Ok(response)
}

/// POST /admin/add-certificate - Register a new certificate
pub async fn add_certificate(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<AddCertificateRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .certificate_registry
        .register(RegisterCertificateRequest {
            certificate_id: req.certificate_id,
            name: req.name,
            issue_date: req.issue_date,
        })
        .await
        .map_err(|e| map_service_error(e, state.config.expose_error_details))?;

    Ok(Json(MessageResponse::ok("Certificate added successfully")))
}
