use async_trait::async_trait;
use fjall::{Config, Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use std::path::Path;
use tracing::{debug, warn};

use crate::core::cache::{CacheError, RateCache};
use crate::core::rates::RateSnapshot;

/// Rate cache persisted in a fjall keyspace, one record per base currency.
pub struct DiskCache {
    keyspace: Keyspace,
    partition: PartitionHandle,
}

impl DiskCache {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, CacheError> {
        std::fs::create_dir_all(path.as_ref())?;

        let keyspace = Config::new(path.as_ref())
            .open()
            .map_err(|e| CacheError::Storage(e.to_string()))?;
        let partition = keyspace
            .open_partition("rates", PartitionCreateOptions::default())
            .map_err(|e| CacheError::Storage(e.to_string()))?;

        Ok(Self {
            keyspace,
            partition,
        })
    }
}

#[async_trait]
impl RateCache for DiskCache {
    async fn get(&self, base: &str) -> Option<RateSnapshot> {
        let bytes = match self.partition.get(base) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!("Cache MISS for base: {}", base);
                return None;
            }
            Err(e) => {
                warn!("Cache read failed for base {}: {}", base, e);
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(snapshot) => {
                debug!("Cache HIT for base: {}", base);
                Some(snapshot)
            }
            Err(e) => {
                warn!("Discarding corrupt cache record for base {}: {}", base, e);
                None
            }
        }
    }

    // Synced through on every put; the process may exit right after.
    async fn put(&self, snapshot: &RateSnapshot) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(snapshot)?;
        self.partition
            .insert(&snapshot.base, bytes)
            .map_err(|e| CacheError::Storage(e.to_string()))?;
        self.keyspace
            .persist(PersistMode::SyncAll)
            .map_err(|e| CacheError::Storage(e.to_string()))?;
        debug!("Cache PUT for base: {}", snapshot.base);
        Ok(())
    }
}
