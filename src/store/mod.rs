pub mod disk;
pub mod memory;

use crate::core::cache::RateCache;
use crate::core::config::AppConfig;
use disk::DiskCache;
use memory::MemoryCache;
use std::sync::Arc;
use tracing::warn;

/// Opens the disk-backed cache at the configured location, degrading to an
/// in-memory cache when the backend cannot be opened.
pub fn open_default(config: &AppConfig) -> Arc<dyn RateCache> {
    let dir = match config.cache_dir() {
        Ok(dir) => dir,
        Err(e) => {
            warn!("No cache directory available: {}. Using in-memory cache", e);
            return Arc::new(MemoryCache::new());
        }
    };

    match DiskCache::open(&dir) {
        Ok(cache) => Arc::new(cache),
        Err(e) => {
            warn!(
                "Failed to open rate cache at {}: {}. Using in-memory cache",
                dir.display(),
                e
            );
            Arc::new(MemoryCache::new())
        }
    }
}
