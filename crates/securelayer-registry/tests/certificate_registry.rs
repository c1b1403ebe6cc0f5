//! Certificate registry integration tests.
//!
//! These tests exercise the registry end to end against RocksDB:
//! - Register/verify round trips
//! - Negative lookups
//! - Uniqueness under sequential and concurrent registration

use securelayer_registry::{
    CertificateRecord, CertificateRegistry, CertificateRegistryService, CertificateView,
    RegisterCertificateRequest, RegistryError, VerifyOutcome,
};
use securelayer_storage::{RocksDbStorage, Storage, CF_CERTIFICATES};
use std::sync::Arc;

type Registry = CertificateRegistryService<RocksDbStorage>;

fn create_registry() -> (Arc<RocksDbStorage>, Arc<Registry>) {
    let storage = Arc::new(RocksDbStorage::open_test().unwrap());
    let registry = Arc::new(CertificateRegistryService::new(Arc::clone(&storage)));
    (storage, registry)
}

fn request(certificate_id: &str, name: &str, issue_date: &str) -> RegisterCertificateRequest {
    RegisterCertificateRequest {
        certificate_id: certificate_id.to_string(),
        name: name.to_string(),
        issue_date: issue_date.to_string(),
    }
}

async fn records_for(storage: &RocksDbStorage, certificate_id: &str) -> usize {
    let all: Vec<(Vec<u8>, CertificateRecord)> = storage.scan_all(CF_CERTIFICATES).await.unwrap();
    all.iter()
        .filter(|(_, record)| record.certificate_id == certificate_id)
        .count()
}

#[tokio::test]
async fn registered_certificates_verify_with_their_details() {
    let (_storage, registry) = create_registry();

    let holders = [
        ("CERT-001", "Jane Doe", "2024-01-15"),
        ("CERT-002", "John Roe", "2023-11-30"),
        ("cert-001", "Lower Case", "15/01/2024"),
    ];

    for (id, name, date) in holders {
        registry.register(request(id, name, date)).await.unwrap();
    }

    for (id, name, date) in holders {
        let outcome = registry.verify(id).await.unwrap();
        assert_eq!(
            outcome,
            VerifyOutcome::Verified(CertificateView {
                name: name.to_string(),
                issue_date: date.to_string(),
                certificate_id: id.to_string(),
            })
        );
    }
}

#[tokio::test]
async fn unregistered_certificates_are_not_found() {
    let (_storage, registry) = create_registry();
    registry
        .register(request("CERT-001", "Jane Doe", "2024-01-15"))
        .await
        .unwrap();

    for id in ["CERT-999", "CERT-0011", "CERT-00"] {
        assert_eq!(registry.verify(id).await.unwrap(), VerifyOutcome::NotFound);
    }
}

#[tokio::test]
async fn second_registration_of_same_id_conflicts() {
    let (storage, registry) = create_registry();

    registry
        .register(request("CERT-001", "Jane Doe", "2024-01-15"))
        .await
        .unwrap();

    let err = registry
        .register(request("CERT-001", "Jane Doe", "2024-01-15"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Conflict(ref msg) if msg == "Certificate ID already exists"
    ));

    // Whitespace variants name the same certificate
    let err = registry
        .register(request("  CERT-001  ", "Jane Doe", "2024-01-15"))
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::Conflict(_)));

    assert_eq!(records_for(&storage, "CERT-001").await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_registrations_store_exactly_one_record() {
    let (storage, registry) = create_registry();

    let mut handles = Vec::new();
    for i in 0..24 {
        let registry = Arc::clone(&registry);
        handles.push(tokio::spawn(async move {
            registry
                .register(request("CERT-RACE", &format!("Holder {}", i), "2024-01-15"))
                .await
        }));
    }

    let mut succeeded = 0;
    let mut conflicted = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => succeeded += 1,
            Err(RegistryError::Conflict(_)) => conflicted += 1,
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }

    assert_eq!(succeeded, 1);
    assert_eq!(conflicted, 23);
    assert_eq!(records_for(&storage, "CERT-RACE").await, 1);
}

#[tokio::test]
async fn registry_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let storage = Arc::new(RocksDbStorage::open(dir.path()).unwrap());
        let registry = CertificateRegistryService::new(storage);
        registry
            .register(request("CERT-001", "Jane Doe", "2024-01-15"))
            .await
            .unwrap();
    }

    let storage = Arc::new(RocksDbStorage::open(dir.path()).unwrap());
    let registry = CertificateRegistryService::new(storage);

    assert!(matches!(
        registry.verify("CERT-001").await.unwrap(),
        VerifyOutcome::Verified(_)
    ));
    assert!(matches!(
        registry
            .register(request("CERT-001", "Jane Doe", "2024-01-15"))
            .await,
        Err(RegistryError::Conflict(_))
    ));
}
