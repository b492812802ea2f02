//! Rate acquisition pipeline: cache lookup, bounded retry fetch, persist.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::core::cache::RateCache;
use crate::core::error::{FetchError, RateError};
use crate::core::rates::{RateSnapshot, RateSource};

/// Tunables for one provider instance.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    /// Total fetch attempts per acquisition.
    pub max_retries: u32,
    /// Fixed delay between consecutive attempts, in seconds.
    pub retry_delay_secs: u64,
    /// Maximum age of a cached snapshot, in seconds.
    pub cache_ttl_secs: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_delay_secs: 2,
            cache_ttl_secs: 3600,
        }
    }
}

/// Resolves rate snapshots for base currencies, cache first.
pub struct RateProvider {
    source: Arc<dyn RateSource>,
    cache: Arc<dyn RateCache>,
    settings: ProviderSettings,
}

impl RateProvider {
    pub fn new(
        source: Arc<dyn RateSource>,
        cache: Arc<dyn RateCache>,
        settings: ProviderSettings,
    ) -> Self {
        Self {
            source,
            cache,
            settings,
        }
    }

    /// Returns a usable snapshot for `base`, fetching only when the cache
    /// holds nothing fresh.
    pub async fn get_rates(&self, base: &str) -> Result<RateSnapshot, RateError> {
        let ttl = chrono::Duration::seconds(self.settings.cache_ttl_secs as i64);
        if let Some(snapshot) = self.cache.get(base).await {
            if snapshot.is_fresh(ttl) {
                debug!("Using cached rates for {}", base);
                return Ok(snapshot);
            }
            debug!("Cached rates for {} expired", base);
        }

        self.fetch_with_retry(base).await
    }

    /// Fetches from the source with a fixed delay between failed attempts.
    ///
    /// A malformed response breaks out immediately; only transport failures
    /// consume further attempts. A persist failure is logged and swallowed
    /// so the fetched snapshot is still returned.
    async fn fetch_with_retry(&self, base: &str) -> Result<RateSnapshot, RateError> {
        let mut last_error = String::from("no fetch attempts were made");

        for attempt in 1..=self.settings.max_retries {
            match self.source.fetch_rates(base).await {
                Ok(snapshot) => {
                    info!("Fetched {} rates for {}", snapshot.rates.len(), base);
                    if let Err(e) = self.cache.put(&snapshot).await {
                        warn!("Failed to cache rates for {}: {}", base, e);
                    }
                    return Ok(snapshot);
                }
                Err(FetchError::Malformed(reason)) => {
                    error!("Malformed rates response for {}: {}", base, reason);
                    return Err(RateError::MalformedResponse {
                        base: base.to_string(),
                        reason,
                    });
                }
                Err(FetchError::Transport(reason)) => {
                    warn!(
                        "Attempt {}/{} failed for {}: {}",
                        attempt, self.settings.max_retries, base, reason
                    );
                    last_error = reason;
                    if attempt < self.settings.max_retries {
                        tokio::time::sleep(Duration::from_secs(self.settings.retry_delay_secs))
                            .await;
                    }
                }
            }
        }

        error!("Max retries reached fetching rates for {}", base);
        Err(RateError::RatesUnavailable {
            base: base.to_string(),
            attempts: self.settings.max_retries,
            last_error,
        })
    }
}
