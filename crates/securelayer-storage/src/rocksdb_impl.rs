//! RocksDB storage implementation.

use crate::{
    column_families::all_column_families,
    errors::{Result, StorageError},
    traits::{deserialize_value, serialize_key, serialize_value, Batch, Storage},
};
use async_trait::async_trait;
use rocksdb::{Options, WriteBatch, DB};
use serde::{de::DeserializeOwned, Serialize};
use std::{path::Path, sync::Arc};
use tempfile::TempDir;
use tokio::sync::Mutex;
use tracing::debug;

/// RocksDB storage implementation
///
/// All writes go through `write_lock`, which makes the precondition check
/// and the write of a conditional batch a single atomic step with respect
/// to every other writer in the process.
pub struct RocksDbStorage {
    db: Arc<DB>,
    write_lock: Arc<Mutex<()>>,
    _temp_dir: Option<TempDir>,
}

impl RocksDbStorage {
    /// Open RocksDB database at the specified path
    ///
    /// Creates all required column families if they don't exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db = Self::open_db(path.as_ref())?;
        Ok(Self {
            db: Arc::new(db),
            write_lock: Arc::new(Mutex::new(())),
            _temp_dir: None,
        })
    }

    /// Open a database in a fresh temporary directory
    ///
    /// The directory lives as long as the returned handle. Public for use in
    /// other crates' tests.
    pub fn open_test() -> Result<Self> {
        let temp_dir = TempDir::new().map_err(StorageError::IoError)?;
        let db = Self::open_db(temp_dir.path())?;
        Ok(Self {
            db: Arc::new(db),
            write_lock: Arc::new(Mutex::new(())),
            _temp_dir: Some(temp_dir),
        })
    }

    fn open_db(path: &Path) -> Result<DB> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let db = DB::open_cf(&opts, path, all_column_families())
            .map_err(|e| StorageError::Database(e.to_string()))?;

        debug!("Opened RocksDB at {:?}", path);
        Ok(db)
    }

    /// Get column family handle
    fn cf_handle(&self, cf: &str) -> Result<&rocksdb::ColumnFamily> {
        self.db
            .cf_handle(cf)
            .ok_or_else(|| StorageError::InvalidColumnFamily(cf.to_string()))
    }
}

#[async_trait]
impl Storage for RocksDbStorage {
    async fn get<K, V>(&self, cf: &str, key: &K) -> Result<Option<V>>
    where
        K: Serialize + Send + Sync,
        V: DeserializeOwned,
    {
        let cf_handle = self.cf_handle(cf)?;
        let key_bytes = serialize_key(key)?;

        let result = self
            .db
            .get_cf(cf_handle, &key_bytes)
            .map_err(|e| StorageError::Database(e.to_string()))?;

        match result {
            Some(bytes) => Ok(Some(deserialize_value(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn put<K, V>(&self, cf: &str, key: &K, value: &V) -> Result<()>
    where
        K: Serialize + Send + Sync,
        V: Serialize + Send + Sync,
    {
        let key_bytes = serialize_key(key)?;
        let value_bytes = serialize_value(value)?;

        let _guard = self.write_lock.lock().await;
        let cf_handle = self.cf_handle(cf)?;
        self.db
            .put_cf(cf_handle, &key_bytes, &value_bytes)
            .map_err(|e| StorageError::Database(e.to_string()))?;

        Ok(())
    }

    async fn exists<K>(&self, cf: &str, key: &K) -> Result<bool>
    where
        K: Serialize + Send + Sync,
    {
        let cf_handle = self.cf_handle(cf)?;
        let key_bytes = serialize_key(key)?;

        let result = self
            .db
            .get_pinned_cf(cf_handle, &key_bytes)
            .map_err(|e| StorageError::Database(e.to_string()))?;

        Ok(result.is_some())
    }

    async fn scan_all<V>(&self, cf: &str) -> Result<Vec<(Vec<u8>, V)>>
    where
        V: DeserializeOwned,
    {
        let cf_handle = self.cf_handle(cf)?;

        let mut results = Vec::new();
        let iter = self.db.iterator_cf(cf_handle, rocksdb::IteratorMode::Start);

        for item in iter {
            let (key, value) = item.map_err(|e| StorageError::Database(e.to_string()))?;
            results.push((key.to_vec(), deserialize_value(&value)?));
        }

        Ok(results)
    }

    fn batch(&self) -> Box<dyn Batch> {
        Box::new(RocksDbBatch {
            db: Arc::clone(&self.db),
            write_lock: Arc::clone(&self.write_lock),
            write_batch: WriteBatch::default(),
            required_absent: Vec::new(),
        })
    }
}

/// RocksDB batch implementation
pub struct RocksDbBatch {
    db: Arc<DB>,
    write_lock: Arc<Mutex<()>>,
    write_batch: WriteBatch,
    required_absent: Vec<(String, Vec<u8>)>,
}

impl RocksDbBatch {
    fn cf_handle<'a>(db: &'a DB, cf: &str) -> Result<&'a rocksdb::ColumnFamily> {
        db.cf_handle(cf)
            .ok_or_else(|| StorageError::InvalidColumnFamily(cf.to_string()))
    }
}

#[async_trait]
impl Batch for RocksDbBatch {
    fn put_raw(&mut self, cf: &str, key: Vec<u8>, value: Vec<u8>) -> Result<()> {
        let cf_handle = Self::cf_handle(&self.db, cf)?;
        self.write_batch.put_cf(cf_handle, &key, &value);
        Ok(())
    }

    fn require_absent_raw(&mut self, cf: &str, key: Vec<u8>) -> Result<()> {
        // Validate the family now so a typo fails before commit
        Self::cf_handle(&self.db, cf)?;
        self.required_absent.push((cf.to_string(), key));
        Ok(())
    }

    async fn commit(self: Box<Self>) -> Result<()> {
        let RocksDbBatch {
            db,
            write_lock,
            write_batch,
            required_absent,
        } = *self;

        let _guard = write_lock.lock().await;

        for (cf, key) in &required_absent {
            let cf_handle = Self::cf_handle(&db, cf)?;
            let existing = db
                .get_pinned_cf(cf_handle, key)
                .map_err(|e| StorageError::Database(e.to_string()))?;
            if existing.is_some() {
                debug!(cf = %cf, "Batch precondition failed, key already exists");
                return Err(StorageError::AlreadyExists { cf: cf.clone() });
            }
        }

        db.write(write_batch)
            .map_err(|e| StorageError::Database(e.to_string()))?;

        debug!("Batch committed successfully");
        Ok(())
    }
}
