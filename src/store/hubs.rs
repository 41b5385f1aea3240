//! Hub record storage operations

use super::{RocksStore, HUBS_CF};
use crate::models::{Hub, HubError, HubResult};

/// Hub store providing keyed access to persisted hubs
#[derive(Clone, Debug)]
pub struct HubStore {
    rocks: RocksStore,
}

impl HubStore {
    /// Create a new hub store
    pub fn new(rocks: RocksStore) -> Self {
        Self { rocks }
    }

    /// Store a hub, replacing any record with the same id
    pub fn put_hub(&self, hub: &Hub) -> HubResult<()> {
        let cf = self.rocks.cf(HUBS_CF)?;
        let value = serde_json::to_vec(hub)?;

        self.rocks
            .db()
            .put_cf(cf, hub.hub_id.as_bytes(), value)
            .map_err(|e| HubError::DatabaseError(e.to_string()))
    }

    /// Store several hubs in one atomic write
    pub fn put_hubs<'a>(&self, hubs: impl IntoIterator<Item = &'a Hub>) -> HubResult<()> {
        let cf = self.rocks.cf(HUBS_CF)?;
        let mut batch = rocksdb::WriteBatch::default();
        for hub in hubs {
            batch.put_cf(cf, hub.hub_id.as_bytes(), serde_json::to_vec(hub)?);
        }

        self.rocks
            .db()
            .write(batch)
            .map_err(|e| HubError::DatabaseError(e.to_string()))
    }

    /// Get a hub by id
    pub fn get_hub(&self, hub_id: &str) -> HubResult<Option<Hub>> {
        let cf = self.rocks.cf(HUBS_CF)?;

        match self.rocks.db().get_cf(cf, hub_id.as_bytes()) {
            Ok(Some(value)) => Ok(Some(serde_json::from_slice(&value)?)),
            Ok(None) => Ok(None),
            Err(e) => Err(HubError::DatabaseError(e.to_string())),
        }
    }

    pub fn contains_hub(&self, hub_id: &str) -> HubResult<bool> {
        let cf = self.rocks.cf(HUBS_CF)?;
        let exists = self
            .rocks
            .db()
            .get_pinned_cf(cf, hub_id.as_bytes())
            .map_err(|e| HubError::DatabaseError(e.to_string()))?
            .is_some();
        Ok(exists)
    }

    /// Load every hub, in key order
    pub fn list_hubs(&self) -> HubResult<Vec<Hub>> {
        let cf = self.rocks.cf(HUBS_CF)?;
        let iter = self.rocks.db().iterator_cf(cf, rocksdb::IteratorMode::Start);

        let mut hubs = Vec::new();
        for item in iter {
            let (_, value) = item.map_err(|e| HubError::DatabaseError(e.to_string()))?;
            hubs.push(serde_json::from_slice(&value)?);
        }

        Ok(hubs)
    }

    /// Count stored hubs
    pub fn count_hubs(&self) -> HubResult<u64> {
        let cf = self.rocks.cf(HUBS_CF)?;
        let iter = self.rocks.db().iterator_cf(cf, rocksdb::IteratorMode::Start);

        let mut count = 0u64;
        for item in iter {
            let _ = item.map_err(|e| HubError::DatabaseError(e.to_string()))?;
            count += 1;
        }

        Ok(count)
    }
}
