//! Registry type definitions.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Value reported for a projected field the stored record does not carry
pub const MISSING_FIELD_PLACEHOLDER: &str = "N/A";

/// Stored certificate record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRecord {
    pub certificate_id: String,
    pub name: String,
    pub issue_date: String,
    /// Unix seconds, set once at insert
    pub created_at: u64,
}

/// Client-facing projection of a certificate record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateView {
    pub name: String,
    pub issue_date: String,
    pub certificate_id: String,
}

impl From<CertificateRecord> for CertificateView {
    fn from(record: CertificateRecord) -> Self {
        Self {
            name: or_placeholder(record.name),
            issue_date: or_placeholder(record.issue_date),
            certificate_id: record.certificate_id,
        }
    }
}

fn or_placeholder(value: String) -> String {
    if value.is_empty() {
        MISSING_FIELD_PLACEHOLDER.to_string()
    } else {
        value
    }
}

/// Result of a verification lookup
///
/// A missing certificate is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    Verified(CertificateView),
    NotFound,
}

/// Certificate registration input
#[derive(Debug, Clone)]
pub struct RegisterCertificateRequest {
    pub certificate_id: String,
    pub name: String,
    pub issue_date: String,
}

/// Stored contact form submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Unix seconds, set once at insert
    pub created_at: u64,
}

/// Contact form input
#[derive(Debug, Clone, Default)]
pub struct SubmitContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Current unix timestamp in seconds
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_substitutes_placeholder_for_empty_fields() {
        let record = CertificateRecord {
            certificate_id: "CERT-7".to_string(),
            name: String::new(),
            issue_date: String::new(),
            created_at: 0,
        };

        let view = CertificateView::from(record);
        assert_eq!(view.name, MISSING_FIELD_PLACEHOLDER);
        assert_eq!(view.issue_date, MISSING_FIELD_PLACEHOLDER);
        assert_eq!(view.certificate_id, "CERT-7");
    }

    #[test]
    fn test_view_keeps_present_fields() {
        let record = CertificateRecord {
            certificate_id: "CERT-001".to_string(),
            name: "Jane Doe".to_string(),
            issue_date: "2024-01-15".to_string(),
            created_at: 1_700_000_000,
        };

        let view = CertificateView::from(record);
        assert_eq!(
            view,
            CertificateView {
                name: "Jane Doe".to_string(),
                issue_date: "2024-01-15".to_string(),
                certificate_id: "CERT-001".to_string(),
            }
        );
    }
}
