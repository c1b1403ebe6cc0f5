//! RocksDB column family definitions.
//!
//! Each collection of documents lives in its own column family. Secondary
//! lookups go through index families keyed by the indexed field.

/// Contact form submissions: document_id → ContactSubmission
pub const CF_CONTACTS: &str = "contacts";

/// Certificate records: document_id → CertificateRecord
pub const CF_CERTIFICATES: &str = "certificates";

/// Unique certificate index: certificate_id → document_id
pub const CF_CERTIFICATES_BY_ID: &str = "certificates_by_id";

/// Get all column family names
pub fn all_column_families() -> Vec<&'static str> {
    vec![CF_CONTACTS, CF_CERTIFICATES, CF_CERTIFICATES_BY_ID]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_column_families_registered() {
        let cfs = all_column_families();
        assert!(cfs.contains(&CF_CONTACTS));
        assert!(cfs.contains(&CF_CERTIFICATES));
        assert!(cfs.contains(&CF_CERTIFICATES_BY_ID));
    }

    #[test]
    fn test_no_duplicate_column_families() {
        let cfs = all_column_families();
        let mut unique = std::collections::HashSet::new();

        for cf in &cfs {
            assert!(unique.insert(cf), "Duplicate column family: {}", cf);
        }
    }
}
