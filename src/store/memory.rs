use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

use crate::core::cache::{CacheError, RateCache};
use crate::core::rates::RateSnapshot;

/// Snapshot store held in process memory.
///
/// Contents vanish with the process, so every run starts cold.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, RateSnapshot>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RateCache for MemoryCache {
    async fn get(&self, base: &str) -> Option<RateSnapshot> {
        let entries = self.entries.lock().await;
        match entries.get(base) {
            Some(snapshot) => {
                debug!("Cache HIT for base: {}", base);
                Some(snapshot.clone())
            }
            None => {
                debug!("Cache MISS for base: {}", base);
                None
            }
        }
    }

    async fn put(&self, snapshot: &RateSnapshot) -> Result<(), CacheError> {
        let mut entries = self.entries.lock().await;
        debug!("Cache PUT for base: {}", snapshot.base);
        entries.insert(snapshot.base.clone(), snapshot.clone());
        Ok(())
    }
}
