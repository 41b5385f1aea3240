//! RocksDB handle shared by the hub store

use std::path::Path;
use std::sync::Arc;

use rocksdb::{BlockBasedOptions, Cache, ColumnFamily, DBCompressionType, Options, DB};

use crate::config::DatabaseSettings;
use crate::models::{HubError, HubResult};

/// Column family holding one JSON document per hub, keyed by hub id
pub const HUBS_CF: &str = "hubs";

const COLUMN_FAMILIES: &[&str] = &[HUBS_CF];

/// Cheaply clonable handle to an open database
#[derive(Clone)]
pub struct RocksStore {
    db: Arc<DB>,
}

impl RocksStore {
    /// Open or create a database with RocksDB defaults
    pub fn open<P: AsRef<Path>>(path: P) -> HubResult<Self> {
        Self::open_cfs(base_options(), path)
    }

    /// Open with an LRU block cache and optional LZ4 compression
    pub fn open_with_opts<P: AsRef<Path>>(
        path: P,
        cache_size_mb: usize,
        compression: bool,
    ) -> HubResult<Self> {
        let mut opts = base_options();

        let mut table_opts = BlockBasedOptions::default();
        table_opts.set_block_cache(&Cache::new_lru_cache(cache_size_mb * 1024 * 1024));
        opts.set_block_based_table_factory(&table_opts);

        if compression {
            opts.set_compression_type(DBCompressionType::Lz4);
        }

        Self::open_cfs(opts, path)
    }

    /// Open using the `[database]` section of the settings
    pub fn open_with_settings(settings: &DatabaseSettings) -> HubResult<Self> {
        Self::open_with_opts(&settings.data_dir, settings.cache_size_mb, settings.compression)
    }

    fn open_cfs<P: AsRef<Path>>(opts: Options, path: P) -> HubResult<Self> {
        let db = DB::open_cf(&opts, path, COLUMN_FAMILIES.iter().copied())?;
        Ok(Self { db: Arc::new(db) })
    }

    pub fn db(&self) -> &DB {
        &self.db
    }

    /// Get a column family handle
    pub fn cf(&self, name: &str) -> HubResult<&ColumnFamily> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| HubError::DatabaseError(format!("Column family not found: {}", name)))
    }
}

fn base_options() -> Options {
    let mut opts = Options::default();
    opts.create_if_missing(true);
    opts.create_missing_column_families(true);
    opts
}

impl std::fmt::Debug for RocksStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RocksStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_database() {
        let temp_dir = TempDir::new().unwrap();
        let store = RocksStore::open(temp_dir.path()).unwrap();

        assert!(store.cf(HUBS_CF).is_ok());
        assert!(store.cf("missing").is_err());
    }

    #[test]
    fn test_reopen_keeps_data() {
        let temp_dir = TempDir::new().unwrap();
        let settings = DatabaseSettings {
            data_dir: temp_dir.path().to_string_lossy().into_owned(),
            compression: true,
            cache_size_mb: 8,
        };
        {
            let store = RocksStore::open_with_settings(&settings).unwrap();
            let cf = store.cf(HUBS_CF).unwrap();
            store.db().put_cf(cf, b"k", b"v").unwrap();
        }

        let store = RocksStore::open(temp_dir.path()).unwrap();
        let cf = store.cf(HUBS_CF).unwrap();
        assert_eq!(store.db().get_cf(cf, b"k").unwrap().as_deref(), Some(&b"v"[..]));
    }
}
