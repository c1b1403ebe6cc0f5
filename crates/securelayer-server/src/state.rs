use anyhow::Result;
use securelayer_registry::{CertificateRegistryService, ContactIntakeService};
use securelayer_storage::RocksDbStorage;
use std::sync::Arc;

use crate::config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Direct storage access for readiness probes
    pub storage: Arc<RocksDbStorage>,
    pub certificate_registry: Arc<CertificateRegistryService<RocksDbStorage>>,
    pub contact_intake: Arc<ContactIntakeService<RocksDbStorage>>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let storage = Arc::new(RocksDbStorage::open(&config.database_path)?);
        Ok(Self::with_storage(config, storage))
    }

    /// Build state around an already opened store
    pub fn with_storage(config: Config, storage: Arc<RocksDbStorage>) -> Self {
        let certificate_registry = Arc::new(CertificateRegistryService::new(storage.clone()));
        let contact_intake = Arc::new(ContactIntakeService::new(storage.clone()));

        AppState {
            config,
            storage,
            certificate_registry,
            contact_intake,
        }
    }
}
