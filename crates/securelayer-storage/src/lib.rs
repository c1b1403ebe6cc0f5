//! # securelayer-storage
//!
//! Document storage for the SecureLayer service, backed by RocksDB.
//!
//! Collections map to column families. Records are stored under an opaque
//! document id; unique secondary keys are kept in index families and written
//! through conditional batches so uniqueness holds under concurrent writers.

#![warn(clippy::all)]

pub mod column_families;
pub mod errors;
pub mod rocksdb_impl;
pub mod traits;

pub use column_families::*;
pub use errors::{Result, StorageError};
pub use rocksdb_impl::RocksDbStorage;
pub use traits::{Batch, BatchExt, Storage};
