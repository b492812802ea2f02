//! Rate snapshot types and the rate source abstraction.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::error::FetchError;

/// Exchange rates for one base currency at a point in time.
///
/// The serialized form doubles as the cache record: the fetch time is stored
/// as epoch seconds under the `timestamp` key, rates keyed by target
/// currency code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSnapshot {
    pub base: String,
    pub rates: HashMap<String, f64>,
    #[serde(rename = "timestamp", with = "chrono::serde::ts_seconds")]
    pub fetched_at: DateTime<Utc>,
}

impl RateSnapshot {
    pub fn new(base: &str, rates: HashMap<String, f64>) -> Self {
        Self {
            base: base.to_string(),
            rates,
            fetched_at: Utc::now(),
        }
    }

    /// Rate for a target currency code. Exact match, codes are uppercase.
    pub fn rate(&self, target: &str) -> Option<f64> {
        self.rates.get(target).copied()
    }

    /// A snapshot is fresh while its age is strictly below the TTL.
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        let age = Utc::now().signed_duration_since(self.fetched_at);
        age < ttl
    }
}

/// One requested conversion. Transient, never persisted.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub base: String,
    pub target: String,
    pub amount: f64,
}

/// A remote service publishing exchange rates for a base currency.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch_rates(&self, base: &str) -> Result<RateSnapshot, FetchError>;
}
